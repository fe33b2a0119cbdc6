// fn main not required
mod contact;
mod health_check;
mod helpers;

// black-box tests are most robust, as they reflect exactly how clients
// interact with the API (e.g. request type, path)
//
// layout:
//
// tests/api/main.rs
// tests/api/helpers.rs -- helpers is -not- an integration test!
// tests/api/some_test.rs
//
// an added benefit of grouping tests in a single dir: "While each executable
// is compiled in parallel, the linking phase is instead entirely sequential!
// Bundling all your test cases in a single executable reduces the time spent
// compiling your test suite in CI."
