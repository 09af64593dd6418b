// 日誌工具

pub fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    // 測試或嵌入時可能已初始化過
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}
