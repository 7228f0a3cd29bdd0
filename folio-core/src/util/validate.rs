pub use fast_chemail::is_valid_email;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_test() {
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(is_valid_email("foo@bar.tld"));
    }
}
