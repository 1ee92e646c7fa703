//! Property testing for composed fragments.

use anstyle::{Ansi256Color, AnsiColor, Color, Effects, RgbColor, Style};
use proptest::{num, prelude::*};
use styled_compose::{optional, sequence, Content, Environment, Fragment};

fn effects() -> impl Strategy<Value = Effects> {
    proptest::bits::u8::between(0, 6).prop_map(|val| {
        let mut this = Effects::new();
        if val & 1 != 0 {
            this = this.insert(Effects::BOLD);
        }
        if val & 2 != 0 {
            this = this.insert(Effects::ITALIC);
        }
        if val & 4 != 0 {
            this = this.insert(Effects::UNDERLINE);
        }
        if val & 8 != 0 {
            this = this.insert(Effects::DIMMED);
        }
        if val & 16 != 0 {
            this = this.insert(Effects::STRIKETHROUGH);
        }
        this
    })
}

fn ansi_color() -> impl Strategy<Value = AnsiColor> {
    prop_oneof![
        Just(AnsiColor::Black),
        Just(AnsiColor::Red),
        Just(AnsiColor::Green),
        Just(AnsiColor::Yellow),
        Just(AnsiColor::Blue),
        Just(AnsiColor::Magenta),
        Just(AnsiColor::Cyan),
        Just(AnsiColor::White),
    ]
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        ansi_color().prop_map(Color::Ansi),
        num::u8::ANY.prop_map(|idx| Ansi256Color(idx).into()),
        (num::u8::ANY, num::u8::ANY, num::u8::ANY)
            .prop_map(|(r, g, b)| { RgbColor(r, g, b).into() }),
    ]
}

fn style() -> impl Strategy<Value = Style> {
    let effects_and_color = (
        effects(),
        proptest::option::of(color()),
        proptest::option::of(color()),
    );
    effects_and_color
        .prop_map(|(effects, fg, bg)| Style::new().effects(effects).fg_color(fg).bg_color(bg))
}

fn fragment() -> impl Strategy<Value = Fragment> {
    let part = ("[a-z ]{0,8}", style());
    proptest::collection::vec(part, 0..4).prop_map(|parts| {
        let mut fragment = Fragment::default();
        for (text, style) in parts {
            fragment.push_styled(&text, style);
        }
        fragment
    })
}

/// Content unit wrapper so that heterogeneous units can be generated by a single strategy.
#[derive(Debug, Clone)]
enum Unit {
    Text(String),
    Styled(Fragment),
}

impl Content for Unit {
    fn render(&self, env: &Environment) -> Fragment {
        match self {
            Self::Text(text) => text.render(env),
            Self::Styled(fragment) => fragment.render(env),
        }
    }
}

fn unit() -> impl Strategy<Value = Unit> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Unit::Text),
        fragment().prop_map(Unit::Styled),
    ]
}

proptest! {
    #[test]
    fn sequence_preserves_order(units in proptest::collection::vec(unit(), 0..6), style in style()) {
        let env = Environment::new(style);
        let expected: Fragment = units.iter().map(|unit| unit.render(&env)).collect();

        let boxed = units
            .into_iter()
            .map(|unit| Box::new(unit) as Box<dyn Content>)
            .collect();
        let composed = sequence(boxed).render(&env);
        prop_assert_eq!(composed, expected);
    }

    #[test]
    fn rendering_is_pure(units in proptest::collection::vec(unit(), 0..6), style in style()) {
        let boxed = units
            .into_iter()
            .map(|unit| Box::new(unit) as Box<dyn Content>)
            .collect();
        let composed = sequence(boxed);

        let env = Environment::new(style);
        prop_assert_eq!(composed.render(&env), composed.render(&env));
    }

    #[test]
    fn absent_content_renders_as_no_op(frag in fragment(), style in style()) {
        let env = Environment::new(style);

        let absent = optional(None::<Fragment>).render(&env);
        prop_assert!(absent.is_empty());
        prop_assert_eq!(absent.runs().len(), 0);

        let present = optional(Some(frag.clone())).render(&env);
        prop_assert_eq!(present, frag);
    }

    #[test]
    fn plain_text_carries_environment_style(text in "[a-z ]{1,16}", style in style()) {
        let rendered = text.as_str().render(&Environment::new(style));
        prop_assert_eq!(rendered.text(), text.as_str());
        for run in rendered.runs() {
            prop_assert_eq!(run.style, style);
        }
    }
}
