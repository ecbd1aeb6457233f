use crate::config::Config;
use crate::ui::animation::AnimationSpec;
use crate::ui::wizard::{
    MultiPartModal, PanelDescriptor, PanelSet, WizardConfig, WizardError, WizardTransitions,
};
use parking_lot::Mutex;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Lifecycle notifications the wizard's callbacks report to the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HostEvent {
    Opened,
    Closed,
    Dismissed,
    Completed,
    Entered(u32),
    Left(u32),
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Opened => write!(f, "open"),
            HostEvent::Closed => write!(f, "closed"),
            HostEvent::Dismissed => write!(f, "dismissed"),
            HostEvent::Completed => write!(f, "completed"),
            HostEvent::Entered(key) => write!(f, "entering panel {key}"),
            HostEvent::Left(key) => write!(f, "leaving panel {key}"),
        }
    }
}

type EventSink = Arc<Mutex<Vec<HostEvent>>>;

fn report(sink: &EventSink, event: HostEvent) -> impl Fn() + Send + Sync + 'static {
    let sink = Arc::clone(sink);
    move || sink.lock().push(event.clone())
}

/// Demo host: a wizard of `config.demo.panels` panels keyed `1..=n`, each of
/// which must be validated before it can be advanced.
pub struct App {
    should_quit: bool,
    config: Config,
    wizard: MultiPartModal<u32>,
    transitions: WizardTransitions<u32>,
    /// Panels the user has validated in this session.
    validated: BTreeSet<u32>,
    /// Filled by wizard callbacks, drained after every dispatch.
    events: EventSink,
    activity: VecDeque<String>,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: Config, now: Instant) -> Result<Self, WizardError> {
        let events: EventSink = Arc::new(Mutex::new(Vec::new()));
        let panels = build_panels(&config, &events)?;
        let wizard_config = WizardConfig::new(config.demo.initial_panel)
            .open(config.demo.start_open)
            .dismiss_label(config.modal.dismiss_label.clone())
            .on_open(report(&events, HostEvent::Opened))
            .on_close(report(&events, HostEvent::Closed))
            .on_dismiss(report(&events, HostEvent::Dismissed))
            .on_complete(report(&events, HostEvent::Completed));
        let wizard = MultiPartModal::new(wizard_config, panels)?;
        let transitions =
            WizardTransitions::new(config.modal.fade_in(), config.modal.fade_out());

        let mut app = Self {
            should_quit: false,
            config,
            wizard,
            transitions,
            validated: BTreeSet::new(),
            events,
            activity: VecDeque::new(),
            last_error: None,
        };
        app.settle(Ok(()), now);
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn wizard(&self) -> &MultiPartModal<u32> {
        &self.wizard
    }

    pub fn transitions(&self) -> &WizardTransitions<u32> {
        &self.transitions
    }

    pub fn is_validated(&self, key: u32) -> bool {
        self.validated.contains(&key)
    }

    /// Host activity, oldest first.
    pub fn activity(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.activity.iter().map(String::as_str)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The open/close button: flips the open flag and forgets validation.
    pub fn toggle_modal(&mut self, now: Instant) {
        let result = self.reset();
        self.settle(result, now);
    }

    /// Mark the current panel as valid so it can be advanced.
    pub fn validate_current(&mut self, now: Instant) {
        if !self.wizard.is_open() {
            return;
        }
        let key = *self.wizard.current_panel();
        let result = self.wizard.set_can_advance(&key, true);
        if result.is_ok() {
            self.validated.insert(key);
        }
        self.settle(result, now);
    }

    pub fn advance(&mut self, now: Instant) {
        let result = self.wizard.advance();
        self.settle(result, now);
    }

    pub fn dismiss(&mut self, now: Instant) {
        let result = self.wizard.dismiss();
        self.settle(result, now);
    }

    fn reset(&mut self) -> Result<(), WizardError> {
        for key in std::mem::take(&mut self.validated) {
            self.wizard.set_can_advance(&key, false)?;
        }
        let is_open = self.wizard.is_open();
        self.wizard.set_open(!is_open)
    }

    /// Record the outcome of a dispatch, react to the callbacks it fired and
    /// bring the animations up to date.
    fn settle(&mut self, result: Result<(), WizardError>, now: Instant) {
        self.record_result(result);

        loop {
            let batch = std::mem::take(&mut *self.events.lock());
            if batch.is_empty() {
                break;
            }
            for event in batch {
                tracing::info!(%event, "Wizard callback");
                self.push_activity(event.to_string());
                if event == HostEvent::Dismissed {
                    let result = self.reset();
                    self.record_result(result);
                }
            }
        }

        self.transitions.sync(&self.wizard, now);
    }

    fn record_result(&mut self, result: Result<(), WizardError>) {
        if let Err(err) = result {
            tracing::error!(error = %err, "Wizard configuration error");
            self.last_error = Some(err.to_string());
        }
    }

    fn push_activity(&mut self, line: String) {
        self.activity.push_back(line);
        while self.activity.len() > self.config.ui.activity_capacity {
            self.activity.pop_front();
        }
    }
}

fn build_panels(config: &Config, events: &EventSink) -> Result<PanelSet<u32>, WizardError> {
    let count = config.demo.panels;
    let enter = AnimationSpec::panel_enter(config.animation.slide_cells, config.animation.enter());
    let leave = AnimationSpec::panel_leave(config.animation.slide_cells, config.animation.leave());

    PanelSet::new((1..=count).map(|key| {
        let is_last = key == count;
        let label = if is_last {
            &config.modal.final_advance_label
        } else {
            &config.modal.advance_label
        };
        PanelDescriptor::new(key)
            .with_next((!is_last).then_some(key + 1))
            .with_advance_label(label.clone())
            .with_enter(enter)
            .with_leave(leave)
            .on_enter(report(events, HostEvent::Entered(key)))
            .on_leave(report(events, HostEvent::Left(key)))
    }))
}
