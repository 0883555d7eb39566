//! Landing Demo - The marketing page as a scrollable terminal document
//!
//! Demonstrates the full reveal pipeline:
//! - Scroll with Up/Down or PageUp/PageDown; sections reveal once as
//!   they enter the viewport and never replay
//! - Stat counters start when their section enters and tick on a shared
//!   clock
//! - The testimonial carousel answers Left/Right and 1-3, and autoplays
//!   on its own clock subscription
//! - q or Esc quits
//!
//! Run with: cargo run --example landing

use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use spark_reveal::content::{
    COUNTER_DURATION_MS, COUNTER_STEPS, SERVICE_PILLARS, STATS, TESTIMONIALS,
};
use spark_reveal::state::clock::{get_tick_count, subscribe_to_clock};
use spark_reveal::state::visibility::{has_entered, observe, release, set_viewport};
use spark_reveal::{Carousel, CounterState, RegionId, RevealController, RegionRect, Viewport};

// Document layout (rows)
const HERO: RegionRect = RegionRect::new(0, 12);
const SERVICES: RegionRect = RegionRect::new(14, 14);
const STATS_SECTION: RegionRect = RegionRect::new(30, 10);
const TESTIMONIALS_SECTION: RegionRect = RegionRect::new(42, 12);
const DOC_HEIGHT: u32 = 56;

/// Carousel autoplay interval.
const AUTOPLAY_MS: u64 = 5000;

/// Restores the terminal on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

/// Per-section reveal bookkeeping: the observed region plus the moment
/// its latch fired (drives stagger delays at render time).
struct Section {
    region: RegionId,
    entered_at: Option<Instant>,
}

impl Section {
    fn observe(rect: RegionRect, threshold: f32) -> Self {
        Self {
            region: observe(rect, threshold, || {}),
            entered_at: None,
        }
    }

    /// Latch check; records the first moment the latch is seen fired.
    fn update(&mut self) -> bool {
        if has_entered(self.region) && self.entered_at.is_none() {
            self.entered_at = Some(Instant::now());
        }
        self.entered_at.is_some()
    }

    /// Whether item `index` of `reveal` should be drawn yet.
    fn item_shown(&self, reveal: &RevealController, index: usize) -> bool {
        match self.entered_at {
            Some(at) => {
                let instruction = reveal.instruction(index, true);
                at.elapsed() >= Duration::from_millis(instruction.transition_delay_ms)
            }
            None => false,
        }
    }
}

fn main() -> io::Result<()> {
    let guard = TerminalGuard::enter()?;

    let (_, viewport_height) = size()?;
    let mut scroll_top: u32 = 0;
    set_viewport(Viewport::new(scroll_top, viewport_height as u32));

    // Sections, observed with the page's thresholds
    let mut hero = Section::observe(HERO, 0.1);
    let mut services = Section::observe(SERVICES, 0.1);
    let mut testimonials_section = Section::observe(TESTIMONIALS_SECTION, 0.2);

    // Stat counters start once their section enters
    let counters: Rc<Vec<CounterState>> = Rc::new(
        STATS
            .iter()
            .map(|stat| CounterState::new(stat.value, COUNTER_STEPS))
            .collect(),
    );
    let counters_for_enter = counters.clone();
    let stats_region = observe(STATS_SECTION, 0.2, move || {
        for counter in counters_for_enter.iter() {
            counter.start();
        }
    });
    let mut stats_section = Section {
        region: stats_region,
        entered_at: None,
    };

    let tick_ms = counters
        .first()
        .map(|c| c.tick_interval_ms(COUNTER_DURATION_MS))
        .unwrap_or(33);
    let unsubscribe_ticks = subscribe_to_clock(tick_ms);
    let mut seen_ticks = 0u64;

    // Testimonial carousel with autoplay
    let carousel = Carousel::new(TESTIMONIALS.to_vec());
    let unsubscribe_autoplay = subscribe_to_clock(AUTOPLAY_MS);
    let mut seen_autoplay = 0u64;

    let pillar_reveal = RevealController::new(SERVICE_PILLARS.len()).with_stagger_step(100);
    let stat_reveal = RevealController::new(STATS.len()).with_stagger_step(100);

    loop {
        // Drive counters: one counter tick per elapsed clock tick
        let ticks = get_tick_count(tick_ms);
        while seen_ticks < ticks {
            seen_ticks += 1;
            for counter in counters.iter() {
                counter.tick();
            }
        }

        // Autoplay: rotate once per interval
        let autoplay_ticks = get_tick_count(AUTOPLAY_MS);
        while seen_autoplay < autoplay_ticks {
            seen_autoplay += 1;
            carousel.next();
        }

        hero.update();
        services.update();
        stats_section.update();
        testimonials_section.update();

        let document = build_document(
            &hero,
            &services,
            &stats_section,
            &testimonials_section,
            &pillar_reveal,
            &stat_reveal,
            &counters,
            &carousel,
        );
        draw(&document, scroll_top, viewport_height)?;

        if let Some(action) = poll_input(Duration::from_millis(16))? {
            match action {
                Action::Quit => break,
                Action::Scroll(delta) => {
                    let max_top = DOC_HEIGHT.saturating_sub(viewport_height as u32);
                    scroll_top = scroll_top
                        .saturating_add_signed(delta)
                        .min(max_top);
                    set_viewport(Viewport::new(scroll_top, viewport_height as u32));
                }
                Action::CarouselNext => carousel.next(),
                Action::CarouselPrev => carousel.prev(),
                Action::CarouselSelect(index) => carousel.select(index),
            }
        }
    }

    // Release everything on the way out
    unsubscribe_ticks();
    unsubscribe_autoplay();
    release(hero.region);
    release(services.region);
    release(stats_section.region);
    release(testimonials_section.region);

    drop(guard);
    Ok(())
}

enum Action {
    Quit,
    Scroll(i32),
    CarouselNext,
    CarouselPrev,
    CarouselSelect(usize),
}

fn poll_input(timeout: Duration) -> io::Result<Option<Action>> {
    if !poll(timeout)? {
        return Ok(None);
    }
    let Event::Key(key) = read()? else {
        return Ok(None);
    };
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    Ok(match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => Some(Action::Scroll(-1)),
        KeyCode::Down => Some(Action::Scroll(1)),
        KeyCode::PageUp => Some(Action::Scroll(-10)),
        KeyCode::PageDown => Some(Action::Scroll(10)),
        KeyCode::Left => Some(Action::CarouselPrev),
        KeyCode::Right => Some(Action::CarouselNext),
        KeyCode::Char(c @ '1'..='9') => {
            Some(Action::CarouselSelect(c as usize - '1' as usize))
        }
        _ => None,
    })
}

#[allow(clippy::too_many_arguments)]
fn build_document(
    hero: &Section,
    services: &Section,
    stats_section: &Section,
    testimonials_section: &Section,
    pillar_reveal: &RevealController,
    stat_reveal: &RevealController,
    counters: &[CounterState],
    carousel: &Carousel<spark_reveal::content::Testimonial>,
) -> Vec<String> {
    let mut doc = vec![String::new(); DOC_HEIGHT as usize];

    let mut put = |row: u32, text: String| {
        if let Some(line) = doc.get_mut(row as usize) {
            *line = text;
        }
    };

    // Hero (above the fold; latches immediately)
    if hero.entered_at.is_some() {
        put(HERO.top + 1, "  RETAIL MARKET RESEARCH".to_string());
        put(HERO.top + 3, "  Data-Driven Decisions for Retail Growth".to_string());
        put(
            HERO.top + 5,
            "  We turn market data into strategies that grow sales.".to_string(),
        );
        put(HERO.top + 8, "  [scroll down with the arrow keys]".to_string());
    }

    // Service pillars, staggered left to right
    put(SERVICES.top, "  -- What We Do --".to_string());
    for (i, pillar) in SERVICE_PILLARS.iter().enumerate() {
        if services.item_shown(pillar_reveal, i) {
            let row = SERVICES.top + 2 + i as u32 * 4;
            put(row, format!("  * {}", pillar.title));
            put(row + 1, format!("      {}", pillar.features[0]));
            put(row + 2, format!("      {}", pillar.features[1]));
        }
    }

    // Stats with live counters
    put(STATS_SECTION.top, "  -- Numbers That Speak for Themselves --".to_string());
    for (i, stat) in STATS.iter().enumerate() {
        if stats_section.item_shown(stat_reveal, i) {
            let row = STATS_SECTION.top + 2 + i as u32 * 2;
            if let Some(counter) = counters.get(i) {
                put(
                    row,
                    format!("  {:>4}{}  {}", counter.display(), stat.suffix, stat.label),
                );
            }
        }
    }

    // Testimonial carousel
    put(TESTIMONIALS_SECTION.top, "  -- What Our Clients Say --".to_string());
    if testimonials_section.entered_at.is_some() {
        if let Some(testimonial) = carousel.current() {
            let top = TESTIMONIALS_SECTION.top;
            put(top + 2, format!("  \"{}\"", testimonial.quote));
            put(
                top + 4,
                format!(
                    "    - {} ({}, {})",
                    testimonial.author, testimonial.role, testimonial.company
                ),
            );
            let dots: String = (0..carousel.len())
                .map(|i| if i == carousel.current_index() { 'o' } else { '.' })
                .collect();
            put(top + 6, format!("    {}   [left/right to rotate]", dots));
        }
    }

    doc
}

fn draw(document: &[String], scroll_top: u32, viewport_height: u16) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, Clear(ClearType::All))?;

    for screen_row in 0..viewport_height {
        let doc_row = scroll_top as usize + screen_row as usize;
        if let Some(line) = document.get(doc_row) {
            queue!(stdout, MoveTo(0, screen_row), Print(line))?;
        }
    }

    stdout.flush()
}
