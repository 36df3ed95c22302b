//! Random URL generation.

use std::fmt;

use rand::Rng;

use crate::sampler::{random_string, Alphabet};

pub const SCHEMES: [&str; 2] = ["http", "https"];
pub const TLDS: [&str; 5] = ["com", "org", "net", "io", "dev"];

/// Components of a generated URL. Renders as
/// `scheme://subdomain.domain.tld/path?key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUrl {
    pub scheme: &'static str,
    pub subdomain: String,
    pub domain: String,
    pub tld: &'static str,
    pub path: String,
    pub key: String,
    pub value: String,
}

impl GeneratedUrl {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scheme = SCHEMES[rng.random_range(0..SCHEMES.len())];
        let subdomain = random_string(rng, 5, Alphabet::Plain);
        let domain = random_string(rng, 8, Alphabet::Plain);
        let tld = TLDS[rng.random_range(0..TLDS.len())];
        let path = random_string(rng, 10, Alphabet::Plain);
        let key = random_string(rng, 5, Alphabet::Plain);
        let value = random_string(rng, 5, Alphabet::Plain);
        Self {
            scheme,
            subdomain,
            domain,
            tld,
            path,
            key,
            value,
        }
    }
}

impl fmt::Display for GeneratedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}.{}.{}/{}?{}={}",
            self.scheme, self.subdomain, self.domain, self.tld, self.path, self.key, self.value
        )
    }
}

/// One random URL, already rendered.
pub fn random_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    GeneratedUrl::random(rng).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn display_joins_components() {
        let u = GeneratedUrl {
            scheme: "https",
            subdomain: "abcde".into(),
            domain: "Domain01".into(),
            tld: "io",
            path: "p123456789".into(),
            key: "kkkkk".into(),
            value: "V0000".into(),
        };
        assert_eq!(u.to_string(), "https://abcde.Domain01.io/p123456789?kkkkk=V0000");
    }

    #[test]
    fn random_components_have_fixed_lengths() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let u = GeneratedUrl::random(&mut rng);
            assert!(SCHEMES.contains(&u.scheme));
            assert!(TLDS.contains(&u.tld));
            assert_eq!(u.subdomain.len(), 5);
            assert_eq!(u.domain.len(), 8);
            assert_eq!(u.path.len(), 10);
            assert_eq!(u.key.len(), 5);
            assert_eq!(u.value.len(), 5);
        }
    }

    #[test]
    fn both_schemes_and_all_tlds_appear() {
        let mut rng = StdRng::seed_from_u64(22);
        let urls: Vec<GeneratedUrl> = (0..500).map(|_| GeneratedUrl::random(&mut rng)).collect();
        for scheme in SCHEMES {
            assert!(urls.iter().any(|u| u.scheme == scheme), "{scheme}");
        }
        for tld in TLDS {
            assert!(urls.iter().any(|u| u.tld == tld), "{tld}");
        }
    }

    #[test]
    fn rendered_url_is_ascii() {
        let mut rng = StdRng::seed_from_u64(23);
        let s = random_url(&mut rng);
        assert!(s.is_ascii());
        assert!(s.starts_with("http"));
    }
}
