//! Small demonstration records used in the examples walkthrough.

use serde::{Deserialize, Serialize};

/// Errors raised when demonstration data fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExampleError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Age cannot be negative: {0}")]
    NegativeAge(i64),
}

/// Build a greeting, falling back to "Hello" when no greeting is given.
pub fn greet(name: &str, greeting: Option<&str>) -> Result<String, ExampleError> {
    if name.trim().is_empty() {
        return Err(ExampleError::EmptyName);
    }

    let greeting = greeting.filter(|g| !g.is_empty()).unwrap_or("Hello");
    Ok(format!("{}, {}!", greeting, name))
}

/// Sum a slice of integers. An empty slice sums to zero.
pub fn sum_numbers(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// A person with a validated, non-negative age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPerson")]
pub struct Person {
    name: String,
    age: u64,
}

#[derive(Deserialize)]
struct RawPerson {
    name: String,
    age: i64,
}

impl TryFrom<RawPerson> for Person {
    type Error = ExampleError;

    fn try_from(raw: RawPerson) -> Result<Self, Self::Error> {
        Person::new(raw.name, raw.age)
    }
}

impl Person {
    /// Create a person, rejecting negative ages.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, ExampleError> {
        let age = u64::try_from(age).map_err(|_| ExampleError::NegativeAge(age))?;
        Ok(Self {
            name: name.into(),
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn introduce(&self) -> String {
        format!("Hi, I am {} and I am {} years old.", self.name, self.age)
    }
}
