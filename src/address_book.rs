//! An address book keyed by `(name, age)`.
//!
//! The key is a struct, so it only needs `Hash + Eq` to go into a
//! `HashMap`. Iteration order is whatever the hasher gives us.

use std::collections::hash_map::{Entry, HashMap};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

pub type Address = String;

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    people: HashMap<Person, Address>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three entries used in class.
    pub fn sample() -> Self {
        let mut book = AddressBook::new();
        book.insert(Person::new("John", 20), "221B Baker Street, London");
        book.insert(Person::new("Mary", 30), "Avenue des Champs-Élysées, Paris");
        book.insert(Person::new("Jack", 73), "Wall Street, New York");
        book
    }

    /// Adds `person` unless already present. An existing entry keeps its
    /// address and `false` is returned.
    pub fn insert(&mut self, person: Person, address: impl Into<Address>) -> bool {
        match self.people.entry(person) {
            Entry::Occupied(entry) => {
                tracing::debug!(name = %entry.key().name, "person already listed, keeping address");
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(address.into());
                true
            }
        }
    }

    pub fn get(&self, person: &Person) -> Option<&str> {
        self.people.get(person).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Person, &str)> {
        self.people
            .iter()
            .map(|(person, address)| (person, address.as_str()))
    }
}

pub fn print_address_book<W: Write>(out: &mut W, book: &AddressBook) -> io::Result<()> {
    for (person, address) in book.iter() {
        writeln!(
            out,
            "{} is {} years old and lives at {}",
            person.name, person.age, address
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_prints_three_lines() {
        let mut out = Vec::new();
        print_address_book(&mut out, &AddressBook::sample()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines: Vec<&str> = text.lines().collect();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "Jack is 73 years old and lives at Wall Street, New York",
                "John is 20 years old and lives at 221B Baker Street, London",
                "Mary is 30 years old and lives at Avenue des Champs-Élysées, Paris",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_insert_keeps_existing_address() {
        let mut book = AddressBook::sample();
        assert!(!book.insert(Person::new("John", 20), "Somewhere else"));
        assert_eq!(
            book.get(&Person::new("John", 20)),
            Some("221B Baker Street, London")
        );
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_name_and_age_form_the_key() {
        let mut book = AddressBook::sample();
        assert!(book.insert(Person::new("John", 21), "Elsewhere"));
        assert_eq!(book.len(), 4);
        assert_eq!(book.get(&Person::new("John", 21)), Some("Elsewhere"));
    }

    #[test]
    fn test_empty_book_prints_nothing() {
        let book = AddressBook::new();
        assert!(book.is_empty());

        let mut out = Vec::new();
        print_address_book(&mut out, &book).unwrap();
        assert!(out.is_empty());
    }
}
