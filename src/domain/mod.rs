mod contact_email;
mod contact_submission;
// allow external `use` statements to skip `contact_email` etc
pub use contact_email::ContactEmail;
pub use contact_submission::ContactSubmission;
