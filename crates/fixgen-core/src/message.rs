//! Templated message generation.
//!
//! A message is one template from the active pool with its placeholders filled
//! in. All eleven placeholder values are drawn on every call, even when the
//! chosen template uses only one or two of them.

use rand::Rng;

use crate::sampler::{random_digits, random_string, Alphabet};
use crate::templates;

/// Named slot in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Code,
    Discount,
    Order,
    News,
    Time,
    Location,
    Points,
    Feature,
    Amount,
    Id,
}

impl Placeholder {
    /// Substitution order.
    pub const ALL: [Placeholder; 11] = [
        Placeholder::Name,
        Placeholder::Code,
        Placeholder::Discount,
        Placeholder::Order,
        Placeholder::News,
        Placeholder::Time,
        Placeholder::Location,
        Placeholder::Points,
        Placeholder::Feature,
        Placeholder::Amount,
        Placeholder::Id,
    ];

    /// Literal token as it appears in templates.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "{name}",
            Placeholder::Code => "{code}",
            Placeholder::Discount => "{discount}",
            Placeholder::Order => "{order}",
            Placeholder::News => "{news}",
            Placeholder::Time => "{time}",
            Placeholder::Location => "{location}",
            Placeholder::Points => "{points}",
            Placeholder::Feature => "{feature}",
            Placeholder::Amount => "{amount}",
            Placeholder::Id => "{id}",
        }
    }
}

/// Freshly drawn value for every placeholder, in [`Placeholder::ALL`] order.
#[derive(Debug, Clone)]
pub struct Substitutions {
    values: Vec<(Placeholder, String)>,
}

impl Substitutions {
    /// Draws all eleven values. `alphabet` applies to the free-text slots
    /// (name, news, location, feature); the transaction id is always plain.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, alphabet: Alphabet) -> Self {
        let mut values = Vec::with_capacity(Placeholder::ALL.len());
        for p in Placeholder::ALL {
            let value = match p {
                Placeholder::Name | Placeholder::Location => random_string(rng, 8, alphabet),
                Placeholder::Code => random_digits(rng, 6),
                Placeholder::Discount => rng.random_range(10..=70u32).to_string(),
                Placeholder::Order => random_digits(rng, 8),
                Placeholder::News => {
                    let first = random_string(rng, 6, alphabet);
                    let second = random_string(rng, 6, alphabet);
                    format!("{first} {second}")
                }
                Placeholder::Time => {
                    let hour = rng.random_range(1..=12u32);
                    let minute = rng.random_range(0..=59u32);
                    let meridiem = if rng.random_bool(0.5) { "AM" } else { "PM" };
                    format!("{hour}:{minute:02} {meridiem}")
                }
                Placeholder::Points => rng.random_range(100..=1000u32).to_string(),
                Placeholder::Feature => random_string(rng, 10, alphabet),
                Placeholder::Amount => {
                    let whole = rng.random_range(10..=1000u32);
                    let cents = rng.random_range(0..=99u32);
                    format!("{whole}.{cents:02}")
                }
                Placeholder::Id => random_string(rng, 12, Alphabet::Plain).to_uppercase(),
            };
            values.push((p, value));
        }
        Self { values }
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces every occurrence of each token present in `template`.
    /// Tokens the template does not contain are skipped.
    pub fn apply(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (p, value) in &self.values {
            let token = p.token();
            if out.contains(token) {
                out = out.replace(token, value);
            }
        }
        out
    }
}

/// Generates one message from the English pool, or from all fifty templates
/// when `multilingual` is set.
pub fn random_message<R: Rng + ?Sized>(rng: &mut R, multilingual: bool) -> String {
    let pool = templates::pool(multilingual);
    let template = pool[rng.random_range(0..pool.len())];
    let subs = Substitutions::generate(rng, Alphabet::for_multilingual(multilingual));
    subs.apply(template)
}
