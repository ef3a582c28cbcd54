//! Built-in map literals, drawn with the standard legend
//! (`#` wall, `o` bouncing critter, `~` wall follower).

use std::fmt;
use std::str::FromStr;

/// A walled valley with a few inner ridges and an empty floor.
pub const VALLEY: [&str; 14] = [
    "###########################",
    "#                         #",
    "# ####                    #",
    "#    #                    #",
    "#    #                    #",
    "#    #####                #",
    "#                         #",
    "#    #################    #",
    "#                    #    #",
    "#                    #    #",
    "#              #######    #",
    "#                         #",
    "#                         #",
    "###########################",
];

/// The valley populated with bouncing critters and wall followers.
pub const MENAGERIE: [&str; 14] = [
    "###########################",
    "#      o                  #",
    "# ####            o       #",
    "#    #   ~                #",
    "#    #              ~     #",
    "#    #####                #",
    "#           o             #",
    "#    #################    #",
    "#  ~                 #  o #",
    "#                    #    #",
    "#        o     #######    #",
    "#                     ~   #",
    "#    o                    #",
    "###########################",
];

/// A single corridor, handy for watching one critter bounce back and forth.
pub const CORRIDOR: [&str; 3] = ["##########", "#o       #", "##########"];

/// Names of the built-in plans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlanId {
    Valley,
    #[default]
    Menagerie,
    Corridor,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::Valley, PlanId::Menagerie, PlanId::Corridor];

    pub const fn name(self) -> &'static str {
        match self {
            PlanId::Valley => "valley",
            PlanId::Menagerie => "menagerie",
            PlanId::Corridor => "corridor",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanId::ALL
            .into_iter()
            .find(|plan| plan.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown plan '{s}'"))
    }
}

/// Rows of a built-in plan.
pub fn plan(id: PlanId) -> &'static [&'static str] {
    match id {
        PlanId::Valley => &VALLEY,
        PlanId::Menagerie => &MENAGERIE,
        PlanId::Corridor => &CORRIDOR,
    }
}
