/// One leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub pos: u8,
    pub name: &'static str,
    pub points: u32,
}

impl Standing {
    const fn new(pos: u8, name: &'static str, points: u32) -> Self {
        Self { pos, name, points }
    }
}

pub const OVERALL: [Standing; 5] = [
    Standing::new(1, "PlayerOne", 15230),
    Standing::new(2, "PlayerTwo", 14110),
    Standing::new(3, "PlayerThree", 13380),
    Standing::new(4, "PlayerFour", 12050),
    Standing::new(5, "PlayerFive", 11040),
];

pub const WEEKLY: [Standing; 5] = [
    Standing::new(1, "PlayerThree", 1980),
    Standing::new(2, "PlayerTwo", 1760),
    Standing::new(3, "PlayerOne", 1650),
    Standing::new(4, "PlayerSix", 1205),
    Standing::new(5, "PlayerSeven", 1110),
];

pub const MONTHLY: [Standing; 5] = [
    Standing::new(1, "PlayerFour", 5230),
    Standing::new(2, "PlayerFive", 4980),
    Standing::new(3, "PlayerOne", 4740),
    Standing::new(4, "PlayerThree", 4400),
    Standing::new(5, "PlayerTwo", 4200),
];
