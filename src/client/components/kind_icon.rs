use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBookOpen, FaEarthAmericas, FaFilm, FaFlag, FaMicrochip, FaRocket, FaUserAstronaut,
};
use dioxus_free_icons::Icon;

use crate::model::catalog::CatalogKind;

#[component]
pub fn KindIcon(kind: CatalogKind) -> Element {
    match kind {
        CatalogKind::Character => rsx! { Icon { width: 14, height: 14, icon: FaUserAstronaut } },
        CatalogKind::Ship => rsx! { Icon { width: 14, height: 14, icon: FaRocket } },
        CatalogKind::Faction => rsx! { Icon { width: 14, height: 14, icon: FaFlag } },
        CatalogKind::Episode => rsx! { Icon { width: 14, height: 14, icon: FaFilm } },
        CatalogKind::Location => rsx! { Icon { width: 14, height: 14, icon: FaEarthAmericas } },
        CatalogKind::Technology => rsx! { Icon { width: 14, height: 14, icon: FaMicrochip } },
        CatalogKind::Lore => rsx! { Icon { width: 14, height: 14, icon: FaBookOpen } },
    }
}
