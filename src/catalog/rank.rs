/// Purchasable tier with a 3-month and a permanent price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub name: &'static str,
    pub ability: &'static str,
    pub price3: &'static str,
    pub permanent: &'static str,
}

pub const RANKS: [Rank; 5] = [
    Rank {
        name: "ELITE",
        ability: "Extra Kit Slot, /nick, /hat",
        price3: "৫৯৳",
        permanent: "১৪৯৳",
    },
    Rank {
        name: "HERO",
        ability: "Double Coins, /fly (lobby), /rename",
        price3: "১৪৯৳",
        permanent: "৩৪৯৳",
    },
    Rank {
        name: "TITAN",
        ability: "Special Commands, /enderchest, kits+",
        price3: "২৪৯৳",
        permanent: "৫৯৯৳",
    },
    Rank {
        name: "LEGEND",
        ability: "VIP Lobby, /anvil, /workbench, trails",
        price3: "৩৯৯৳",
        permanent: "৮৯৯৳",
    },
    Rank {
        name: "PHANTOM",
        ability: "All Perks, priority queue, /disguise",
        price3: "৫৯৯৳",
        permanent: "১৯৯৯৳",
    },
];
