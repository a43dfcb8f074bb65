pub mod attack;
pub mod inspect;

/// Startup banner printed before either mode runs
pub const BANNER: &str = "\
╔════════════════════════════════════════╗
║      Login Form Brute Force Tool       ║
╚════════════════════════════════════════╝";

#[cfg(test)]
mod tests {
    use super::BANNER;

    #[test]
    fn banner_is_a_closed_box() {
        assert!(BANNER.contains("Brute Force"));
        assert!(BANNER.starts_with('╔'));
        assert!(BANNER.ends_with('╝'));
    }
}
