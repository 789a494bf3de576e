pub mod client_redirect;
