/// Sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
}

pub const ROUTES: [RouteInfo; 6] = [
    RouteInfo {
        path: "/dashboard",
        title: "Dashboard",
        icon: "design_app",
        class: "",
    },
    RouteInfo {
        path: "/categorias",
        title: "Categorías",
        icon: "shopping_basket",
        class: "",
    },
    RouteInfo {
        path: "/usuarios",
        title: "Usuarios",
        icon: "users_single-02",
        class: "",
    },
    RouteInfo {
        path: "/productos",
        title: "Productos",
        icon: "shopping_box",
        class: "",
    },
    RouteInfo {
        path: "/notifications",
        title: "Notificaciones",
        icon: "ui-1_bell-53",
        class: "",
    },
    RouteInfo {
        path: "/upgrade",
        title: "Configuración",
        icon: "objects_spaceship",
        class: "active active-pro",
    },
];

/// Widest viewport, in pixels, that still gets the collapsed mobile menu.
pub const MOBILE_BREAKPOINT: u32 = 991;

/// Every sidebar entry. The menu is not filtered by role.
pub fn menu_items() -> &'static [RouteInfo] {
    &ROUTES
}

pub fn is_mobile_menu(width: u32) -> bool {
    width <= MOBILE_BREAKPOINT
}
