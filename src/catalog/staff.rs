#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staff {
    pub name: &'static str,
    pub role: &'static str,
    pub ign: &'static str,
    pub discord: &'static str,
    pub photo: &'static str,
}

impl Staff {
    const fn new(
        name: &'static str,
        role: &'static str,
        ign: &'static str,
        discord: &'static str,
        photo: &'static str,
    ) -> Self {
        Self {
            name,
            role,
            ign,
            discord,
            photo,
        }
    }
}

pub const STAFF: [Staff; 9] = [
    Staff::new("Tanber", "FOUNDER", "notcooldamn2", "tanber_369", "assets/myskin.png"),
    Staff::new("Sohrab", "CO FOUNDER", "notcooldamn3", "sohrab_369", "assets/sohrab.png"),
    Staff::new("Ahsan", "Partner", "ryuzen", "monkey._.d._.luffy2", "assets/ahsan.png"),
    Staff::new("Arfat", "Manager", "onxy", "onyx.plays", "assets/arfat.png"),
    Staff::new("Asraful", "Moderator", "asraful_vai", "asraful_vai", "assets/asraful.png"),
    Staff::new("Risat", "Senior Staff", "risat", "resath", "assets/risat.png"),
    Staff::new("Rasel", "Social Manager", "CANDYB0T", "candyb0t", "assets/rasel.png"),
    Staff::new("Siam", "Social Manager", "siam", "siam45795", "assets/siam.png"),
    Staff::new("Tanver", "Developer", "tenzenx", "tenzenx", "assets/tanver.png"),
];
