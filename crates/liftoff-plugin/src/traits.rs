//! The hook contract implemented by plugins.

use liftoff_core::config::AppConfig;
use liftoff_core::result::AppResult;
use liftoff_core::types::{Runtime, UserError};

/// A bootstrap observer.
///
/// Every hook has a no-op default. Hooks run synchronously, one plugin at a
/// time, in registration order. Returning an error propagates to the host
/// through the dispatcher.
///
/// The milestones fire in this order, each exactly once:
///
/// 1. [`configure`](Plugin::configure)
/// 2. [`before_launch`](Plugin::before_launch)
/// 3. [`after_setup`](Plugin::after_setup)
/// 4. [`after_startup`](Plugin::after_startup)
///
/// [`on_user_error`](Plugin::on_user_error) fires zero or more times once the
/// interpreter can run user code, and may interleave with `after_startup`.
pub trait Plugin: Send + Sync {
    /// Name used in logs and error reports. Not required to be unique.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Validate the configuration keys this plugin owns and fill in defaults.
    ///
    /// Unknown keys in the plugin's namespace should be rejected here.
    ///
    /// Must not do expensive work: it delays the interpreter download that
    /// starts afterwards.
    fn configure(&self, _config: &mut AppConfig) -> AppResult<()> {
        Ok(())
    }

    /// Preliminary initialization is complete and the interpreter is about to
    /// be downloaded and launched.
    ///
    /// The page is ready at this point, so this is where to set up anything
    /// that must exist before the interpreter starts. Must not do expensive
    /// work.
    fn before_launch(&self, _config: &mut AppConfig) -> AppResult<()> {
        Ok(())
    }

    /// The interpreter is live and its environment is installed. No user
    /// script has run yet.
    fn after_setup(&self, _runtime: &dyn Runtime) -> AppResult<()> {
        Ok(())
    }

    /// All startup user scripts have executed; the host now accepts
    /// interactive input.
    fn after_startup(&self, _runtime: &dyn Runtime) -> AppResult<()> {
        Ok(())
    }

    /// User-authored code raised an error.
    fn on_user_error(&self, _error: &UserError) -> AppResult<()> {
        Ok(())
    }
}
