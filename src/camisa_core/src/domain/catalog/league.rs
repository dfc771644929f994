/// An entry of the storefront's league menu.
///
/// `id` is the URL slug; `name` is the value stored in each product's `liga` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub id: &'static str,
    pub name: &'static str,
}

pub const LEAGUES: [League; 8] = [
    League {
        id: "premier-league",
        name: "Premier League",
    },
    League {
        id: "brasileirao",
        name: "Brasileirão",
    },
    League {
        id: "la-liga",
        name: "La Liga",
    },
    League {
        id: "serie-a",
        name: "Serie A",
    },
    League {
        id: "ligue-1",
        name: "Ligue 1",
    },
    League {
        id: "bundesliga",
        name: "Bundesliga",
    },
    League {
        id: "portugal",
        name: "Portugal",
    },
    League {
        id: "selecoes",
        name: "Seleções",
    },
];

impl League {
    pub fn find(id: &str) -> Option<&'static League> {
        LEAGUES.iter().find(|league| league.id == id)
    }
}

/// The league name products are tagged with, or the slug itself when it is not on the menu.
pub fn league_display_name(id: &str) -> &str {
    League::find(id).map_or(id, |league| league.name)
}
