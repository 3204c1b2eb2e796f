// Injection pipeline phases
//
// Each phase performs one effect on the target project. They run in file
// order and the first failure stops the run.

#[path = "01_register.rs"]
pub mod register;
#[path = "02_install.rs"]
pub mod install;
#[path = "03_run.rs"]
pub mod run;
#[path = "04_verify.rs"]
pub mod verify;

pub use install::InstallAssetPhase;
pub use register::RegisterTaskPhase;
pub use run::RunInjectedTaskPhase;
pub use verify::VerifyTracePhase;
