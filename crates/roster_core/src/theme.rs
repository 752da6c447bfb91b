//! Light/dark presentation state. Only colours change with the theme.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub panel_background: Rgb,
    pub table_background: Rgb,
    pub text: Rgb,
    pub selection: Rgb,
}

const LIGHT_PALETTE: Palette = Palette {
    panel_background: Rgb(255, 237, 243),
    table_background: Rgb(173, 238, 217),
    text: Rgb::BLACK,
    selection: Rgb(200, 200, 255),
};

const DARK_PALETTE: Palette = Palette {
    panel_background: Rgb(60, 63, 65),
    table_background: Rgb(45, 45, 45),
    text: Rgb(220, 220, 220),
    selection: Rgb(80, 80, 80),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub fill: Rgb,
    pub text: Rgb,
}

impl ButtonColors {
    pub const ADD: ButtonColors = ButtonColors {
        fill: Rgb(10, 186, 181),
        text: Rgb::WHITE,
    };
    pub const DELETE: ButtonColors = ButtonColors {
        fill: Rgb(86, 223, 207),
        text: Rgb::BLACK,
    };
    pub const EDIT: ButtonColors = ButtonColors {
        fill: Rgb(255, 204, 100),
        text: Rgb::BLACK,
    };
    pub const TOGGLE_THEME: ButtonColors = ButtonColors {
        fill: Rgb(200, 200, 200),
        text: Rgb::BLACK,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }
}
