use std::any::Any;
use std::fmt;
use std::io;

use log::trace;
use serde::Serialize;

use crate::console::Console;
use crate::error::{AnimalError, AnimalResult};

/// Sentence spoken by an animal that does not know its own kind
pub const UNKNOWN_SOUND: &str = "I do not know what type of animal I am. :(";

pub const DOG_SOUND: &str = "Woof!";

/// Concrete variant behind an `Animal` handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Animal,
    Dog,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Animal => "animal",
            Kind::Dog => "dog",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every animal.
///
/// Callers holding a `&dyn Animal` get the variant's own `make_sound`,
/// whatever the concrete type is.
pub trait Animal {
    fn name(&self) -> &str;

    fn kind(&self) -> Kind;

    fn as_any(&self) -> &dyn Any;

    fn print_name(&self, console: &mut Console<'_>) -> io::Result<()> {
        console.name(self.name())
    }

    fn make_sound(&self, console: &mut Console<'_>) -> io::Result<()> {
        console.sound(UNKNOWN_SOUND)
    }
}

/// An animal of no particular kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseAnimal {
    pub name: String,
}

impl BaseAnimal {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        trace!("new animal '{}'", name);
        BaseAnimal { name }
    }
}

impl Animal for BaseAnimal {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Kind {
        Kind::Animal
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A dog: an animal with a collar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    #[serde(flatten)]
    pub base: BaseAnimal,
    pub collar_brand: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, collar_brand: impl Into<String>) -> Self {
        let base = BaseAnimal::new(name);
        let collar_brand = collar_brand.into();
        trace!("'{}' wears a {} collar", base.name, collar_brand);
        Dog { base, collar_brand }
    }

    pub fn collar_brand(&self) -> &str {
        &self.collar_brand
    }

    pub fn mark_territory(&self, console: &mut Console<'_>) -> io::Result<()> {
        console.line(&format!("{} marked his territory!", self.base.name))
    }

    /// Same act, worded the way the embedding demo words it
    pub fn pee_on_fire_hydrant(&self, console: &mut Console<'_>) -> io::Result<()> {
        console.line(&format!("{} marks his territory!", self.base.name))
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn kind(&self) -> Kind {
        Kind::Dog
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn make_sound(&self, console: &mut Console<'_>) -> io::Result<()> {
        console.sound(DOG_SOUND)
    }
}

fn wrong_variant(animal: &dyn Animal, expected: Kind) -> AnimalError {
    AnimalError::WrongVariant {
        name: animal.name().to_string(),
        expected,
        found: animal.kind(),
    }
}

/// Narrow an animal handle back to the `Dog` it holds
pub fn as_dog(animal: &dyn Animal) -> AnimalResult<&Dog> {
    match animal.as_any().downcast_ref::<Dog>() {
        Some(dog) => Ok(dog),
        None => Err(wrong_variant(animal, Kind::Dog)),
    }
}

/// One constructed animal, as reported after a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Animal(BaseAnimal),
    Dog(Dog),
}

impl Entry {
    pub fn of(animal: &dyn Animal) -> Self {
        match as_dog(animal) {
            Ok(dog) => Entry::Dog(dog.clone()),
            Err(_) => Entry::Animal(BaseAnimal {
                name: animal.name().to_string(),
            }),
        }
    }
}

/// Animals constructed by a driver run
pub type Roster = Vec<Entry>;

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Console<'_>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        {
            let mut console = Console::new(&mut buf);
            f(&mut console).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn base_animal_prints_name_and_fallback_sound() {
        let bob = BaseAnimal::new("Bob the unknown");
        assert_eq!(capture(|c| bob.print_name(c)), "Bob the unknown\n");
        assert_eq!(
            capture(|c| bob.make_sound(c)),
            "I do not know what type of animal I am. :(\n"
        );
    }

    #[test]
    fn dog_behind_trait_object_barks() {
        let animal: Box<dyn Animal> = Box::new(Dog::new("Cozmo the dog", "Barky"));
        assert_eq!(capture(|c| animal.print_name(c)), "Cozmo the dog\n");
        assert_eq!(capture(|c| animal.make_sound(c)), "Woof!\n");
        assert_eq!(animal.kind(), Kind::Dog);
    }

    #[test]
    fn repeated_calls_print_the_same_thing() {
        let animal: &dyn Animal = &Dog::new("Rex", "Acme");
        let first = capture(|c| {
            animal.print_name(c)?;
            animal.make_sound(c)
        });
        let second = capture(|c| {
            animal.print_name(c)?;
            animal.make_sound(c)
        });
        assert_eq!(first, second);
    }

    #[test]
    fn downcast_exposes_collar_brand() {
        let animal: Box<dyn Animal> = Box::new(Dog::new("Cozmo the dog", "Barky"));
        let dog = as_dog(animal.as_ref()).unwrap();
        assert_eq!(dog.collar_brand(), "Barky");
        assert_eq!(
            capture(|c| dog.mark_territory(c)),
            "Cozmo the dog marked his territory!\n"
        );
    }

    #[test]
    fn downcast_of_base_animal_fails() {
        let animal: Box<dyn Animal> = Box::new(BaseAnimal::new("Bob the unknown"));
        match as_dog(animal.as_ref()) {
            Err(AnimalError::WrongVariant { name, expected, found }) => {
                assert_eq!(name, "Bob the unknown");
                assert_eq!(expected, Kind::Dog);
                assert_eq!(found, Kind::Animal);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn hydrant_line_uses_present_tense() {
        let dog = Dog::new("Cozmo the dog", "Barky");
        assert_eq!(
            capture(|c| dog.pee_on_fire_hydrant(c)),
            "Cozmo the dog marks his territory!\n"
        );
    }

    #[test]
    fn names_and_collars_are_mutable() {
        let mut dog = Dog::new("Cozmo the dog", "Barky");
        dog.base.name = "Rex".to_string();
        dog.collar_brand = "Acme".to_string();
        let animal: &dyn Animal = &dog;
        assert_eq!(capture(|c| animal.print_name(c)), "Rex\n");
        assert_eq!(as_dog(animal).unwrap().collar_brand(), "Acme");
    }

    #[test]
    fn roster_entry_keeps_the_current_name() {
        let mut bob = BaseAnimal::new("Bob the unknown");
        bob.name = "Bob the renamed".to_string();
        assert_eq!(
            Entry::of(&bob),
            Entry::Animal(BaseAnimal {
                name: "Bob the renamed".to_string()
            })
        );
        let kind: &'static str = Kind::Dog.as_str();
        assert_eq!(kind, "dog");
    }

    #[test]
    fn roster_entries_serialize_with_kind_tag() {
        let dog = Dog::new("Cozmo the dog", "Barky");
        let json = serde_json::to_value(Entry::of(&dog)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "dog", "name": "Cozmo the dog", "collar_brand": "Barky"})
        );
        let bob = BaseAnimal::new("Bob the unknown");
        let json = serde_json::to_value(Entry::of(&bob)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "animal", "name": "Bob the unknown"}));
    }
}
