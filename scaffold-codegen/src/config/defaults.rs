//! Default configuration values - single source of truth

/// Default base directory under which the module directory is created
pub const OUTPUT_DIR: &str = ".";

/// Default source root between the module and the namespace directories
pub const SOURCE_ROOT: &str = "src/main/java";

/// Default namespace when none is given on the command line
pub const NAMESPACE: &str = "com.example";

/// Default package of the shared base library the generated classes extend
pub const CORE_PACKAGE: &str = "backendcoreservice";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
