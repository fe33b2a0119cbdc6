use super::ContactEmail;

/// One contact-form payload, validated at the route boundary (all fields
/// non-empty, email parsed). Lives for exactly one request: composed into the
/// outbound email, then dropped. No identifier, no storage, no retention.
pub struct ContactSubmission {
    pub name: String,
    pub email: ContactEmail,
    pub subject: String,
    pub message: String,
}
