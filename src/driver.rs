use clap::ValueEnum;
use log::debug;
use serde::Serialize;

use crate::console::Console;
use crate::error::AnimalResult;
use crate::types::{as_dog, Animal, BaseAnimal, Dog, Entry, Roster};

/// Which demo routine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Call each animal directly, then read the collar through a downcast
    #[default]
    Classic,
    /// Go through a shared helper and finish with the dog marking territory
    Interface,
    /// Same handle reused for both animals, then a rerun through the helper
    Embedding,
    /// Concrete animals passed to the helper, collar read without a downcast
    EmbeddingInterface,
}

/// Print name and sound of any animal without knowing its kind
pub fn describe(console: &mut Console<'_>, animal: &dyn Animal) -> AnimalResult<()> {
    debug!("describing {} '{}'", animal.kind(), animal.name());
    animal.print_name(console)?;
    animal.make_sound(console)?;
    Ok(())
}

fn cast() -> (BaseAnimal, Box<dyn Animal>) {
    let unknown_animal = BaseAnimal::new("Bob the unknown");
    let polymorphic_dog: Box<dyn Animal> = Box::new(Dog::new("Cozmo the dog", "Barky"));
    (unknown_animal, polymorphic_dog)
}

pub fn run_classic(console: &mut Console<'_>) -> AnimalResult<Roster> {
    let (unknown_animal, polymorphic_dog) = cast();

    unknown_animal.print_name(console)?;
    unknown_animal.make_sound(console)?;

    polymorphic_dog.print_name(console)?;
    polymorphic_dog.make_sound(console)?;

    let dog = as_dog(polymorphic_dog.as_ref())?;
    console.line(dog.collar_brand())?;

    Ok(vec![Entry::of(&unknown_animal), Entry::of(polymorphic_dog.as_ref())])
}

pub fn run_interface(console: &mut Console<'_>) -> AnimalResult<Roster> {
    let (unknown_animal, polymorphic_dog) = cast();

    describe(console, &unknown_animal)?;
    describe(console, polymorphic_dog.as_ref())?;
    console.blank()?;

    unknown_animal.print_name(console)?;
    let dog = as_dog(polymorphic_dog.as_ref())?;
    console.line(dog.collar_brand())?;
    dog.mark_territory(console)?;

    Ok(vec![Entry::of(&unknown_animal), Entry::of(polymorphic_dog.as_ref())])
}

pub fn run_embedding(console: &mut Console<'_>) -> AnimalResult<Roster> {
    let unknown_animal = BaseAnimal::new("Bob the unknown");
    unknown_animal.print_name(console)?;
    unknown_animal.make_sound(console)?;

    let mut polymorphic_animal: &dyn Animal = &unknown_animal;
    polymorphic_animal.print_name(console)?;
    polymorphic_animal.make_sound(console)?;

    let first_dog = Dog::new("Cozmo the dog", "Barky");
    polymorphic_animal = &first_dog;
    polymorphic_animal.print_name(console)?;
    polymorphic_animal.make_sound(console)?;

    console.blank()?;
    console.line("***Proper way***")?;

    let proper_animal = BaseAnimal::new("Bob the unknown");
    let proper_dog = Dog::new("Cozmo the dog", "Barky");
    describe(console, &proper_animal)?;
    describe(console, &proper_dog)?;
    console.line(proper_dog.collar_brand())?;

    Ok(vec![
        Entry::of(&unknown_animal),
        Entry::of(&first_dog),
        Entry::of(&proper_animal),
        Entry::of(&proper_dog),
    ])
}

pub fn run_embedding_interface(console: &mut Console<'_>) -> AnimalResult<Roster> {
    let unknown_animal = BaseAnimal::new("Bob the unknown");
    let cozmo = Dog::new("Cozmo the dog", "Barky");

    describe(console, &unknown_animal)?;
    describe(console, &cozmo)?;

    console.blank()?;
    console.line(&unknown_animal.name)?;
    console.line(cozmo.collar_brand())?;
    cozmo.pee_on_fire_hydrant(console)?;

    Ok(vec![Entry::of(&unknown_animal), Entry::of(&cozmo)])
}

pub fn run(variant: Variant, console: &mut Console<'_>) -> AnimalResult<Roster> {
    debug!("running {:?} demo", variant);
    let roster = match variant {
        Variant::Classic => run_classic(console)?,
        Variant::Interface => run_interface(console)?,
        Variant::Embedding => run_embedding(console)?,
        Variant::EmbeddingInterface => run_embedding_interface(console)?,
    };
    console.flush()?;
    Ok(roster)
}
