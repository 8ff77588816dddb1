mod form;
mod method;
mod outcome;

pub use form::{WipeForm, WipeFormError};
pub use method::WipeMethod;
pub use outcome::{WipeOutcome, submit};
