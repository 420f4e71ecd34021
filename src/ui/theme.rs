use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub list: Color,
    pub dialog: Color,
    pub text: Color,
    pub dim: Color,
    pub focus: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(153, 153, 255),
            list: Color::Rgb(204, 204, 255),
            dialog: Color::Rgb(230, 230, 250),
            text: Color::Black,
            dim: Color::Rgb(60, 60, 110),
            focus: Color::Rgb(40, 40, 140),
            error: Color::Rgb(170, 20, 20),
        }
    }
}
