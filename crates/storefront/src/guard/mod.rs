mod access;
mod role;
mod shell;

pub use self::access::{
    AccessGuard, GuardState, Guarded, RedirectTarget, SignOutReason, Verdict, evaluate,
};
pub use self::role::{Role, effective_role, profile_role};
pub use self::shell::GuardShell;
