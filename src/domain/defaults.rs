//! Default card sets shown before a parent has customized a category.

use super::card::Card;

fn labels(items: &[&str]) -> Vec<Card> {
    items.iter().map(|label| Card::new(*label)).collect()
}

pub fn phrases() -> Vec<Card> {
    labels(&[
        "Good Morning",
        "Good Night",
        "Please",
        "Thank You",
        "Help",
        "Sorry",
        "I Love You",
        "Kiss",
        "Hug",
        "Play",
        "I'm Hungry",
        "I'm Thirsty",
        "Toilet",
    ])
}

pub fn food() -> Vec<Card> {
    labels(&[
        "Water",
        "Juice",
        "Milk",
        "Apple",
        "Sandwich",
        "Ice Cream",
        "Breakfast",
        "Lunch",
        "Dinner",
    ])
}

pub fn people() -> Vec<Card> {
    labels(&[
        "Mummy",
        "Daddy",
        "Brother",
        "Sister",
        "Nanna",
        "Granddad",
        "Friend",
        "Teacher",
    ])
}

/// Feelings ship with icons (MaterialCommunityIcons names)
pub fn feelings() -> Vec<Card> {
    [
        ("I Feel Sad", "emoticon-sad-outline"),
        ("I Feel Happy", "emoticon-happy-outline"),
        ("I Feel Angry", "emoticon-angry-outline"),
        ("I Feel Scared", "emoticon-frown-outline"),
        ("I Feel Tired", "sleep"),
        ("I Feel Sick", "emoticon-sick-outline"),
        ("I Feel Excited", "emoticon-excited-outline"),
        ("I Feel Hungry", "food-fork-drink"),
        ("I Feel Thirsty", "cup-water"),
        ("I Feel Lonely", "account-outline"),
        ("I Feel Brave", "shield-star-outline"),
        ("I Feel Silly", "emoticon-tongue-outline"),
    ]
    .into_iter()
    .map(|(label, icon)| Card::new(label).with_icon(icon))
    .collect()
}
