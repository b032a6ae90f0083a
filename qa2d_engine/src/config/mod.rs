//! Configuration for the qa2d engine
//!
//! Compile-time limits are generated by build.rs from `config/<profile>.toml`;
//! runtime preferences come from `QA2D_*` environment variables.

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("QA2D_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("QA2D_CONFIG_DIR").unwrap_or("config")
    }

    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time;

    #[test]
    fn test_generated_limits_are_usable() {
        assert!(compile_time::analysis::MAX_QUESTION_TOKENS > 0);
        assert!(compile_time::analysis::MAX_ANSWER_TOKENS > 0);
        assert!(compile_time::analysis::MAX_ANCESTOR_HOPS >= 1);
        assert!(compile_time::batch::MAX_CHUNK_SIZE > 0);
    }

    #[test]
    fn test_source_info_names_profile() {
        let info = super::build_info::source_info();
        assert!(info.ends_with(".toml"));
        assert!(info.contains(super::build_info::profile()));
    }
}
