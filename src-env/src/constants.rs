/// Environment variable holding the project root
pub const CEC2009_DIR: &str = "CEC2009_DIR";

/// Directory (relative to `CEC2009_DIR`) receiving generated files
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` receiving plots
pub const PLOTS: &str = "plots";
