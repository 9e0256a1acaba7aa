use anyhow::{anyhow, bail};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

macro_rules! players {
    ($($variant:ident = $index:literal => $name:literal),+ $(,)?) => {
        /// A seat at the table. `Chance` is the environment, `Unknown` a seat not yet known.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Player {
            $($variant = $index),+
        }

        impl Player {
            pub const ALL: &'static [Player] = &[$(Player::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Player::$variant => $name),+
                }
            }
        }

        impl TryFrom<i32> for Player {
            type Error = anyhow::Error;

            fn try_from(index: i32) -> anyhow::Result<Self> {
                match index {
                    $($index => Ok(Player::$variant),)+
                    other => bail!("no player with index {other}"),
                }
            }
        }

        impl TryFrom<&str> for Player {
            type Error = anyhow::Error;

            fn try_from(s: &str) -> anyhow::Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok(Player::$variant),)+
                    other => other
                        .parse::<i32>()
                        .map_err(|_| anyhow!("unknown player `{s}`"))
                        .and_then(Player::try_from),
                }
            }
        }
    };
}

players! {
    Unknown = -2 => "unknown",
    Chance = -1 => "chance",
    Alex = 0 => "alex",
    Bob = 1 => "bob",
    Cedric = 2 => "cedric",
    Dexter = 3 => "dexter",
    Emily = 4 => "emily",
    Florence = 5 => "florence",
    Gustavo = 6 => "gustavo",
    Henrick = 7 => "henrick",
    Ian = 8 => "ian",
    Julia = 9 => "julia",
    Kelvin = 10 => "kelvin",
    Lea = 11 => "lea",
    Michael = 12 => "michael",
    Norbert = 13 => "norbert",
    Oscar = 14 => "oscar",
    Pedro = 15 => "pedro",
    Quentin = 16 => "quentin",
    Rosie = 17 => "rosie",
    Sophia = 18 => "sophia",
    Tristan = 19 => "tristan",
    Ulysses = 20 => "ulysses",
    Victoria = 21 => "victoria",
    William = 22 => "william",
    Xavier = 23 => "xavier",
    Yusuf = 24 => "yusuf",
    Zoey = 25 => "zoey",
}

impl Player {
    pub fn is_chance(self) -> bool {
        self == Player::Chance
    }

    /// The named seats, excluding chance and unknown.
    pub fn seats() -> impl Iterator<Item = Player> {
        Self::ALL.iter().copied().filter(|p| i32::from(*p) >= 0)
    }
}

impl From<Player> for i32 {
    fn from(player: Player) -> i32 {
        player as i32
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Player::try_from(s)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stochasticity {
    /// No randomness in any transition.
    Deterministic,
    /// The environment draws one random outcome when asked.
    Sample,
    /// The environment lists the random outcomes to choose from.
    Choice,
}

pub type PlayerHashMap<V> = FxHashMap<Player, V>;
pub type DenseHashMap<K, V> = FxHashMap<K, V>;

#[cfg(test)]
mod test {
    use crate::game_defs::*;

    #[test]
    fn names_and_indices_round_trip() {
        for &player in Player::ALL {
            assert_eq!(player.to_string().parse::<Player>().unwrap(), player);
            assert_eq!(Player::try_from(i32::from(player)).unwrap(), player);
        }
        assert_eq!(Player::ALL.len(), 28);
    }

    #[test]
    fn fixed_indices() {
        assert_eq!(i32::from(Player::Unknown), -2);
        assert_eq!(i32::from(Player::Chance), -1);
        assert_eq!(i32::from(Player::Alex), 0);
        assert_eq!(i32::from(Player::Zoey), 25);
    }

    #[test]
    fn parses_case_and_digits() {
        assert_eq!(Player::try_from(" Bob ").unwrap(), Player::Bob);
        assert_eq!("3".parse::<Player>().unwrap(), Player::Dexter);
        assert_eq!("-1".parse::<Player>().unwrap(), Player::Chance);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!("zed".parse::<Player>().is_err());
        assert!(Player::try_from(26).is_err());
        assert!(Player::try_from(-3).is_err());
        let err = "zed".parse::<Player>().unwrap_err();
        assert!(err.to_string().contains("zed"));
    }

    #[test]
    fn seats_skip_chance_and_unknown() {
        let seats: Vec<_> = Player::seats().collect();
        assert_eq!(seats.len(), 26);
        assert_eq!(seats.first(), Some(&Player::Alex));
        assert!(seats.iter().all(|p| !p.is_chance()));
    }

    #[test]
    fn player_map_by_seat() {
        let mut stacks: PlayerHashMap<u32> = PlayerHashMap::default();
        stacks.insert(Player::Alex, 100);
        *stacks.entry(Player::Alex).or_default() += 5;
        assert_eq!(stacks[&Player::Alex], 105);
        assert!(!stacks.contains_key(&Player::Bob));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Player::Emily).unwrap(), "\"emily\"");
        let back: Player = serde_json::from_str("\"chance\"").unwrap();
        assert_eq!(back, Player::Chance);
    }
}
