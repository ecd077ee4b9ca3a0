/// Screens of the management shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Products,
    AddProduct,
    ViewProducts,
    Customers,
    Orders,
}

/// What pressing a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch to another screen.
    Goto(Screen),
    /// Collect the product form and submit it to the API.
    SubmitProduct,
    /// The entry exists in the layout but no screen is wired behind it.
    Unavailable,
}

/// A labelled menu entry.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Products => "Products",
            Screen::AddProduct => "Add Product",
            Screen::ViewProducts => "View Products",
            Screen::Customers => "Customers",
            Screen::Orders => "Orders",
        }
    }
}

/// Menu entries for a screen, in display order.
pub fn buttons(screen: Screen) -> &'static [Button] {
    match screen {
        Screen::Home => &[
            Button {
                label: "Manage Products",
                action: Action::Goto(Screen::Products),
            },
            Button {
                label: "Manage Customers",
                action: Action::Goto(Screen::Customers),
            },
            Button {
                label: "Manage Orders",
                action: Action::Goto(Screen::Orders),
            },
        ],
        Screen::Products => &[
            Button {
                label: "Add Product",
                action: Action::Goto(Screen::AddProduct),
            },
            Button {
                label: "View Products",
                action: Action::Goto(Screen::ViewProducts),
            },
            Button {
                label: "Back to Home",
                action: Action::Goto(Screen::Home),
            },
        ],
        Screen::AddProduct => &[
            Button {
                label: "Add Product",
                action: Action::SubmitProduct,
            },
            Button {
                label: "Back to Products",
                action: Action::Goto(Screen::Products),
            },
        ],
        Screen::ViewProducts => &[Button {
            label: "Back to Products",
            action: Action::Goto(Screen::Products),
        }],
        Screen::Customers => &[
            Button {
                label: "Add Customer",
                action: Action::Unavailable,
            },
            Button {
                label: "View Customers",
                action: Action::Unavailable,
            },
            Button {
                label: "Back to Home",
                action: Action::Goto(Screen::Home),
            },
        ],
        Screen::Orders => &[
            Button {
                label: "Create Order",
                action: Action::Unavailable,
            },
            Button {
                label: "View Orders",
                action: Action::Unavailable,
            },
            Button {
                label: "Back to Home",
                action: Action::Goto(Screen::Home),
            },
        ],
    }
}

/// Resolve a 1-based menu choice on `screen` to its action.
pub fn select(screen: Screen, choice: usize) -> Option<Action> {
    let index = choice.checked_sub(1)?;
    buttons(screen).get(index).map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SCREENS: [Screen; 6] = [
        Screen::Home,
        Screen::Products,
        Screen::AddProduct,
        Screen::ViewProducts,
        Screen::Customers,
        Screen::Orders,
    ];

    #[test]
    fn every_screen_has_a_menu() {
        for screen in ALL_SCREENS {
            assert!(!buttons(screen).is_empty(), "{:?} has no buttons", screen);
        }
    }

    #[test]
    fn every_screen_is_reachable_from_home() {
        let mut reached = vec![Screen::Home];
        let mut frontier = vec![Screen::Home];
        while let Some(screen) = frontier.pop() {
            for button in buttons(screen) {
                if let Action::Goto(next) = button.action {
                    if !reached.contains(&next) {
                        reached.push(next);
                        frontier.push(next);
                    }
                }
            }
        }
        for screen in ALL_SCREENS {
            assert!(reached.contains(&screen), "{:?} unreachable", screen);
        }
    }

    #[test]
    fn every_screen_leads_back_to_home() {
        for start in ALL_SCREENS {
            let mut current = start;
            for _ in 0..4 {
                if current == Screen::Home {
                    break;
                }
                // Follow the last entry, which is always the back button.
                let back = buttons(current).last().unwrap().action;
                match back {
                    Action::Goto(next) => current = next,
                    other => panic!("{:?} ends in {:?}", start, other),
                }
            }
            assert_eq!(current, Screen::Home, "no way home from {:?}", start);
        }
    }

    #[test]
    fn select_maps_one_based_choices() {
        assert_eq!(
            select(Screen::Home, 1),
            Some(Action::Goto(Screen::Products))
        );
        assert_eq!(
            select(Screen::Home, 3),
            Some(Action::Goto(Screen::Orders))
        );
        assert_eq!(select(Screen::AddProduct, 1), Some(Action::SubmitProduct));
    }

    #[test]
    fn select_rejects_out_of_range_choices() {
        assert_eq!(select(Screen::Home, 0), None);
        assert_eq!(select(Screen::Home, 4), None);
        assert_eq!(select(Screen::ViewProducts, 2), None);
    }

    #[test]
    fn customer_and_order_entries_are_unavailable() {
        assert_eq!(select(Screen::Customers, 1), Some(Action::Unavailable));
        assert_eq!(select(Screen::Customers, 2), Some(Action::Unavailable));
        assert_eq!(select(Screen::Orders, 1), Some(Action::Unavailable));
        assert_eq!(select(Screen::Orders, 2), Some(Action::Unavailable));
    }
}
