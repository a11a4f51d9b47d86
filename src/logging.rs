/*
 * Logging Module
 *
 * Builds the env_logger backend. Everything logs at `info` by default and
 * the chatty graphics crates are held at `warn`. `RUST_LOG` is parsed last,
 * so any directive it names overrides these defaults.
 */

use env_logger::{Builder, Env};
use log::LevelFilter;

// Graphics crates that flood the log at info level
const QUIET_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

pub fn builder<'a, E: Into<Env<'a>>>(env: E) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.parse_env(env);
    builder
}

pub fn init() {
    builder(Env::default()).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    // Variable names that are never set, so only the fallback applies
    const UNSET: &str = "FLOCKING_LOGGING_TEST_UNSET";

    #[test]
    fn defaults_to_info_with_quiet_graphics_crates() {
        let logger = builder(Env::new().filter(UNSET)).build();

        assert!(enabled(&logger, "flocking", Level::Info));
        assert!(!enabled(&logger, "flocking", Level::Debug));
        assert!(enabled(&logger, "wgpu_core", Level::Warn));
        assert!(!enabled(&logger, "wgpu_core", Level::Info));
        assert!(!enabled(&logger, "naga", Level::Info));
    }

    #[test]
    fn environment_overrides_the_graphics_caps() {
        let logger = builder(Env::new().filter_or(UNSET, "wgpu_core=debug")).build();

        assert!(enabled(&logger, "wgpu_core", Level::Debug));
        assert!(!enabled(&logger, "wgpu_hal", Level::Info));
    }
}
