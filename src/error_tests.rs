//! Tests for the `NetworkError` taxonomy.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::error::{BoxError, NetworkError};

fn cause() -> BoxError {
    "underlying cause".into()
}

fn queries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

fn sample(kind: &str) -> NetworkError {
    let url = "https://example.com/path".to_owned();
    match kind {
        "invalidUrl" => NetworkError::InvalidUrl {
            scheme: Some("https".to_owned()),
            host: "example.com".to_owned(),
            path: "path".to_owned(),
            queries: queries(&[("q", "1")]),
        },
        "timeout" => NetworkError::Timeout { url },
        "noNetwork" => NetworkError::NoNetwork { url },
        "transport" => NetworkError::Transport {
            source: cause(),
            url,
        },
        "encoding" => NetworkError::Encoding {
            source: cause(),
            url,
        },
        "decoding" => NetworkError::Decoding {
            source: cause(),
            data: Some(b"raw".to_vec()),
            url,
        },
        "unauthenticated" => NetworkError::Unauthenticated { url },
        "restricted" => NetworkError::Restricted { url },
        "client" => NetworkError::Client {
            code: 404,
            data: b"missing".to_vec(),
            url,
        },
        "server" => NetworkError::Server {
            code: 500,
            data: b"broken".to_vec(),
            url,
        },
        other => panic!("unknown error kind {other}"),
    }
}

const ALL_KINDS: [&str; 10] = [
    "invalidUrl",
    "timeout",
    "noNetwork",
    "transport",
    "encoding",
    "decoding",
    "unauthenticated",
    "restricted",
    "client",
    "server",
];

mod identifiers {
    use super::*;

    #[test]
    fn kind_matches_stable_identifier() {
        for kind in ALL_KINDS {
            assert_eq!(sample(kind).kind(), kind);
        }
    }

    #[test]
    fn codes_are_distinct_across_variants() {
        let codes: HashSet<u16> = ALL_KINDS.iter().map(|kind| sample(kind).code()).collect();
        assert_eq!(codes.len(), ALL_KINDS.len());
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(sample("invalidUrl").code(), 7000);
        assert_eq!(sample("timeout").code(), 7001);
        assert_eq!(sample("noNetwork").code(), 7002);
        assert_eq!(sample("transport").code(), 7003);
        assert_eq!(sample("encoding").code(), 7004);
        assert_eq!(sample("decoding").code(), 7005);
        assert_eq!(sample("unauthenticated").code(), 7006);
        assert_eq!(sample("restricted").code(), 7007);
        assert_eq!(sample("client").code(), 7008);
        assert_eq!(sample("server").code(), 7009);
    }
}

mod urls {
    use super::*;

    #[test]
    fn url_returns_originating_url() {
        for kind in ALL_KINDS.iter().copied().filter(|kind| *kind != "invalidUrl") {
            assert_eq!(sample(kind).url(), "https://example.com/path");
        }
    }

    #[test]
    fn invalid_url_reconstructs_from_parts() {
        let error = NetworkError::InvalidUrl {
            scheme: Some("https".to_owned()),
            host: "example.com".to_owned(),
            path: "search".to_owned(),
            queries: queries(&[("q", "1")]),
        };

        assert_eq!(error.url(), "https://example.com/search?q=1");
    }

    #[test]
    fn invalid_url_without_scheme_omits_separator() {
        let error = NetworkError::InvalidUrl {
            scheme: None,
            host: "example.com".to_owned(),
            path: String::new(),
            queries: BTreeMap::new(),
        };

        assert_eq!(error.url(), "example.com");
    }
}

mod equality {
    use super::*;

    #[test]
    fn same_variant_same_fields_are_equal() {
        for kind in ALL_KINDS {
            assert_eq!(sample(kind), sample(kind));
        }
    }

    #[test]
    fn different_variants_are_never_equal() {
        for left in ALL_KINDS {
            for right in ALL_KINDS {
                if left != right {
                    assert_ne!(sample(left), sample(right));
                }
            }
        }
    }

    #[test]
    fn url_participates_in_equality() {
        let timeout = NetworkError::Timeout {
            url: "https://a.example".to_owned(),
        };
        let other = NetworkError::Timeout {
            url: "https://b.example".to_owned(),
        };

        assert_ne!(timeout, other);
    }

    #[test]
    fn transport_equality_ignores_cause() {
        let url = "https://example.com/".to_owned();
        let left = NetworkError::Transport {
            source: "one".into(),
            url: url.clone(),
        };
        let right = NetworkError::Transport {
            source: "completely different".into(),
            url,
        };

        assert_eq!(left, right);
    }

    #[test]
    fn decoding_equality_compares_data() {
        let url = "https://example.com/".to_owned();
        let left = NetworkError::Decoding {
            source: cause(),
            data: Some(b"a".to_vec()),
            url: url.clone(),
        };
        let same = NetworkError::Decoding {
            source: cause(),
            data: Some(b"a".to_vec()),
            url: url.clone(),
        };
        let different = NetworkError::Decoding {
            source: cause(),
            data: Some(b"b".to_vec()),
            url,
        };

        assert_eq!(left, same);
        assert_ne!(left, different);
    }

    #[test]
    fn client_equality_includes_url() {
        let left = NetworkError::Client {
            code: 404,
            data: b"x".to_vec(),
            url: "https://a.example/".to_owned(),
        };
        let same = NetworkError::Client {
            code: 404,
            data: b"x".to_vec(),
            url: "https://a.example/".to_owned(),
        };
        let different_url = NetworkError::Client {
            code: 404,
            data: b"x".to_vec(),
            url: "https://b.example/".to_owned(),
        };

        assert_eq!(left, same);
        assert_ne!(left, different_url);
    }

    #[test]
    fn server_equality_includes_code_and_data() {
        let url = "https://example.com/".to_owned();
        let left = NetworkError::Server {
            code: 500,
            data: b"x".to_vec(),
            url: url.clone(),
        };
        let different_code = NetworkError::Server {
            code: 503,
            data: b"x".to_vec(),
            url: url.clone(),
        };
        let different_data = NetworkError::Server {
            code: 500,
            data: b"y".to_vec(),
            url,
        };

        assert_ne!(left, different_code);
        assert_ne!(left, different_data);
    }
}

mod descriptions {
    use super::*;

    #[test]
    fn timeout_description_names_url() {
        let text = sample("timeout").to_string();
        assert!(text.contains("https://example.com/path"));
        assert!(text.contains("timed out"));
    }

    #[test]
    fn invalid_url_description_names_parts() {
        let text = sample("invalidUrl").to_string();
        assert!(text.contains("host: example.com"));
        assert!(text.contains("path: path"));
        assert!(text.contains("scheme: https"));
    }

    #[test]
    fn server_description_includes_code_and_body() {
        let text = sample("server").to_string();
        assert!(text.contains("500 status code"));
        assert!(text.contains("broken"));
    }

    #[test]
    fn status_description_omits_empty_body() {
        let error = NetworkError::Client {
            code: 404,
            data: Vec::new(),
            url: "https://example.com/".to_owned(),
        };

        let text = error.to_string();
        assert!(text.contains("404 status code"));
        assert!(!text.contains("responded"));
    }

    #[test]
    fn decoding_description_shows_missing_data() {
        let error = NetworkError::Decoding {
            source: cause(),
            data: None,
            url: "https://example.com/".to_owned(),
        };

        assert!(error.to_string().contains("no data"));
    }

    #[test]
    fn decoding_description_renders_body_lossily() {
        let error = NetworkError::Decoding {
            source: cause(),
            data: Some(b"not json".to_vec()),
            url: "https://example.com/".to_owned(),
        };

        assert!(error.to_string().contains("not json"));
    }
}

mod sources {
    use super::*;
    use std::error::Error;

    #[test]
    fn transport_exposes_underlying_cause() {
        let error = sample("transport");
        assert!(error.source().is_some());
    }

    #[test]
    fn status_variants_have_no_cause() {
        assert!(sample("server").source().is_none());
        assert!(sample("timeout").source().is_none());
    }
}
