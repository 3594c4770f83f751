//! API endpoint URL builders

/// Build the GOSt profile endpoint URL
pub fn profile_url(base_url: &str) -> String {
    format!("{}/api/gost/profile/", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url() {
        let url = profile_url("https://biit.cs.ut.ee/gprofiler");
        assert_eq!(url, "https://biit.cs.ut.ee/gprofiler/api/gost/profile/");
    }

    #[test]
    fn test_profile_url_trailing_slash() {
        let url = profile_url("http://localhost:8000/");
        assert_eq!(url, "http://localhost:8000/api/gost/profile/");
    }
}
