use yew::prelude::*;
use yew_hooks::use_interval;

use crate::interaction::{use_media_query, use_reveal, DESKTOP_BREAKPOINT, TITLE_THRESHOLD};

const COUNT_DURATION_MS: u32 = 1500;
const COUNT_TICK_MS: u32 = 20;

/// Count-up from zero to the number inside a label such as "150+".
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    target: u32,
    current: f64,
    increment: f64,
}

impl StatCounter {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (duration_ms / tick_ms.max(1)).max(1);
        Self {
            target,
            current: 0.0,
            increment: target as f64 / ticks as f64,
        }
    }

    /// Digits of `label` read as one number; labels without digits give 0.
    pub fn parse_target(label: &str) -> u32 {
        label
            .chars()
            .filter(|c| c.is_ascii_digit())
            .fold(0u32, |acc, c| {
                acc.saturating_mul(10)
                    .saturating_add(c.to_digit(10).unwrap_or(0))
            })
    }

    pub fn tick(&mut self) -> u32 {
        self.current = (self.current + self.increment).min(self.target as f64);
        self.value()
    }

    pub fn value(&self) -> u32 {
        self.current.floor() as u32
    }

    pub fn finished(&self) -> bool {
        self.value() >= self.target
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}

/// Tick delay for the count-up timer. Zero stops it.
pub fn tick_delay(revealed: bool, shown: u32, target: u32) -> u32 {
    if revealed && shown < target {
        COUNT_TICK_MS
    } else {
        0
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedStatProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("#38b6ff"))]
    pub color: AttrValue,
    #[prop_or_default]
    pub index: u32,
}

#[function_component(AnimatedStat)]
pub fn animated_stat(props: &AnimatedStatProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), TITLE_THRESHOLD);
    let count = use_state_eq(|| 0u32);
    let target = StatCounter::parse_target(&props.value);
    let counter = use_mut_ref(|| StatCounter::new(target, COUNT_DURATION_MS, COUNT_TICK_MS));
    if counter.borrow().target() != target {
        *counter.borrow_mut() = StatCounter::new(target, COUNT_DURATION_MS, COUNT_TICK_MS);
    }

    {
        let delay = tick_delay(revealed, *count, target);
        let count = count.clone();
        let counter = counter.clone();
        use_interval(
            move || {
                let mut counter = counter.borrow_mut();
                if !counter.finished() {
                    count.set(counter.tick());
                }
            },
            delay,
        );
    }

    let style = format!(
        "display: flex; flex-direction: column; align-items: center; opacity: {}; \
         transform: translateY({}px); transition: opacity 0.6s ease-out {}ms, transform 0.6s ease-out {}ms;",
        if revealed { 1 } else { 0 },
        if revealed { 0 } else { 30 },
        props.index * 100,
        props.index * 100,
    );

    html! {
        <div ref={node} class="animated-stat" style={style}>
            <p style={format!("font-size: 3.5rem; font-weight: 800; margin-bottom: 8px; color: {};", props.color)}>
                {format!("{}+", *count)}
            </p>
            <h3 style="font-size: 1.2rem; font-weight: 600; color: #fff; text-align: center;">{&props.label}</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    /// `(value, label)` pairs such as `("150+", "Dedicated Customers")`.
    pub stats: &'static [(&'static str, &'static str)],
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    let is_desktop = use_media_query(DESKTOP_BREAKPOINT);

    let style = format!(
        "display: grid; gap: 40px; max-width: 72rem; margin: 0 auto; grid-template-columns: {};",
        if is_desktop { "repeat(4, 1fr)" } else { "repeat(2, 1fr)" }
    );

    html! {
        <div class="stat-grid" style={style}>
            { for props.stats.iter().enumerate().map(|(i, (value, label))| html! {
                <AnimatedStat value={*value} label={*label} index={i as u32} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_keeps_digits_only() {
        assert_eq!(StatCounter::parse_target("150+"), 150);
        assert_eq!(StatCounter::parse_target("1,200"), 1200);
        assert_eq!(StatCounter::parse_target("Years"), 0);
    }

    #[test]
    fn test_counts_up_to_target_and_stops() {
        let mut counter = StatCounter::new(150, COUNT_DURATION_MS, COUNT_TICK_MS);
        let mut previous = 0;
        let mut ticks = 0;
        while !counter.finished() {
            let value = counter.tick();
            assert!(value >= previous);
            previous = value;
            ticks += 1;
            assert!(ticks <= 100);
        }
        assert_eq!(counter.value(), 150);
        assert_eq!(counter.tick(), 150);
    }

    #[test]
    fn test_timer_stops_once_target_is_shown() {
        assert_eq!(tick_delay(false, 0, 150), 0);
        assert_eq!(tick_delay(true, 0, 150), COUNT_TICK_MS);
        assert_eq!(tick_delay(true, 149, 150), COUNT_TICK_MS);
        assert_eq!(tick_delay(true, 150, 150), 0);
        assert_eq!(tick_delay(true, 0, 0), 0);

        let mut counter = StatCounter::new(70, COUNT_DURATION_MS, COUNT_TICK_MS);
        let mut shown = 0;
        let mut ticks = 0;
        while tick_delay(true, shown, counter.target()) > 0 {
            shown = counter.tick();
            ticks += 1;
            assert!(ticks <= 100);
        }
        assert_eq!(shown, 70);
    }

    #[test]
    fn test_zero_target_is_already_finished() {
        let counter = StatCounter::new(0, COUNT_DURATION_MS, COUNT_TICK_MS);
        assert!(counter.finished());
    }
}
