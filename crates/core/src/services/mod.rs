mod new_app;

pub use new_app::{NewAppController, SubmitOutcome};
