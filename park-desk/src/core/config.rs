/// 前台配置 - 停车场前台的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | PARK_SEED | (未设置) | 车位布局随机种子，设置后布局可复现 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | (未设置) | 日志文件目录，未设置时只输出到控制台 |
///
/// # 示例
///
/// ```ignore
/// PARK_SEED=42 LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 车位布局种子 (None = 每次启动随机)
    pub seed: Option<u64>,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    ///
    /// 常用于测试场景
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            seed: lookup("PARK_SEED").and_then(|s| s.trim().parse().ok()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
        }
    }

    /// 使用固定种子覆盖配置
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert!(!config.is_production());
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PARK_SEED", " 42 "),
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/tmp/park-logs"),
        ]));
        assert!(config.is_production());
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/park-logs"));
    }

    #[test]
    fn test_unparsable_seed_and_blank_dir_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("PARK_SEED", "abc"), ("LOG_DIR", "  ")]));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.with_seed(7).seed, Some(7));
    }
}
