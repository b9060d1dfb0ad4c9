//! The imperative shell around the listbox machine.
//!
//! A [`ListboxService`] owns one widget's snapshot. Each `send` resolves the
//! live element handles, asks the pure machine for a step, installs the
//! result, runs selection callbacks, queues focus work for the next frame and
//! finally tells listeners.

use super::error::HostError;
use super::frame::FrameQueue;
use super::inspect::{DropReason, Inspector, NoopInspector};
use crate::core::{Snapshot, StepResult};
use crate::dom::{Dom, ElementId};
use crate::listbox::{
    listbox_machine, Dispatch, EventKind, FocusTarget, ListboxConfig, ListboxContext,
    ListboxEffect, ListboxEnv, ListboxEvent, ListboxMachine, ListboxSnapshot, ListboxState,
    OptionDescriptor, Refs, Value,
};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

/// Supplies the widget's element handles at dispatch time.
pub trait RefSource {
    fn refs(&self) -> Refs;
}

impl<F> RefSource for F
where
    F: Fn() -> Refs,
{
    fn refs(&self) -> Refs {
        self()
    }
}

/// Handles that never change.
impl RefSource for Refs {
    fn refs(&self) -> Refs {
        *self
    }
}

/// Handle returned by [`ListboxService::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Running,
    Stopped,
}

type Listener<V> = Box<dyn FnMut(&ListboxSnapshot<V>)>;

/// Builder for [`ListboxService`].
pub struct ServiceBuilder<V: Value> {
    dom: Rc<dyn Dom>,
    refs: Box<dyn RefSource>,
    value: Option<V>,
    options: Arc<[OptionDescriptor<V>]>,
    config: ListboxConfig,
    inspector: Rc<dyn Inspector<V>>,
    machine: Option<Arc<ListboxMachine<V>>>,
}

impl<V: Value> ServiceBuilder<V> {
    /// Initially committed value.
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Initial option registry. Later changes arrive through
    /// `GetDerivedData`.
    pub fn options(mut self, options: impl Into<Arc<[OptionDescriptor<V>]>>) -> Self {
        self.options = options.into();
        self
    }

    pub fn config(mut self, config: ListboxConfig) -> Self {
        self.config = config;
        self
    }

    pub fn inspector(mut self, inspector: impl Inspector<V> + 'static) -> Self {
        self.inspector = Rc::new(inspector);
        self
    }

    /// Share an already built definition instead of building a new one.
    pub fn machine(mut self, machine: Arc<ListboxMachine<V>>) -> Self {
        self.machine = Some(machine);
        self
    }

    pub fn build(self) -> Result<ListboxService<V>, HostError> {
        let machine = match self.machine {
            Some(machine) => machine,
            None => Arc::new(listbox_machine()?),
        };
        let context = ListboxContext::new(self.value).with_options(self.options);
        let snapshot = Rc::new(machine.initial_snapshot(context));
        let id = Uuid::new_v4();

        self.inspector.started(id, snapshot.value);

        Ok(ListboxService {
            id,
            env: ListboxEnv::new(self.dom, self.config),
            refs: self.refs,
            machine,
            snapshot,
            listeners: Vec::new(),
            next_subscription: 0,
            frames: FrameQueue::new(),
            inspector: self.inspector,
            status: ServiceStatus::Running,
        })
    }
}

/// One running listbox widget.
///
/// Selection callbacks run inside `send` and must not send to the same
/// service; schedule follow-up events instead.
pub struct ListboxService<V: Value> {
    id: Uuid,
    machine: Arc<ListboxMachine<V>>,
    env: ListboxEnv,
    refs: Box<dyn RefSource>,
    snapshot: Rc<ListboxSnapshot<V>>,
    listeners: Vec<(SubscriptionId, Listener<V>)>,
    next_subscription: u64,
    frames: FrameQueue,
    inspector: Rc<dyn Inspector<V>>,
    status: ServiceStatus,
}

impl<V: Value> ListboxService<V> {
    pub fn builder(dom: Rc<dyn Dom>, refs: impl RefSource + 'static) -> ServiceBuilder<V> {
        ServiceBuilder {
            dom,
            refs: Box::new(refs),
            value: None,
            options: Arc::from(Vec::new()),
            config: ListboxConfig::default(),
            inspector: Rc::new(NoopInspector),
            machine: None,
        }
    }

    /// Instance id, used in every log line this service emits.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    /// The current snapshot. Unchanged as long as no event is accepted.
    pub fn snapshot(&self) -> Rc<ListboxSnapshot<V>> {
        Rc::clone(&self.snapshot)
    }

    pub fn state(&self) -> ListboxState {
        self.snapshot.value
    }

    pub fn context(&self) -> &ListboxContext<V> {
        &self.snapshot.context
    }

    /// Deliver one event.
    ///
    /// Returns whether a transition fired. Events the current state does not
    /// accept, or whose guards all fail, are dropped without an error.
    pub fn send(&mut self, event: ListboxEvent<V>) -> Result<bool, HostError> {
        if self.status == ServiceStatus::Stopped {
            return Err(HostError::Stopped);
        }

        let dispatch = Dispatch::new(event, self.refs.refs());
        let kind = dispatch.event.kind();
        let from = self.snapshot.value;
        self.inspector.event(self.id, from, kind);

        let step = match self
            .machine
            .transition(from, &self.snapshot.context, &dispatch, &self.env)
        {
            StepResult::Transitioned(step) => step,
            StepResult::Unhandled => {
                self.inspector
                    .dropped(self.id, from, kind, &DropReason::Unhandled);
                return Ok(false);
            }
            StepResult::Blocked { guards } => {
                self.inspector
                    .dropped(self.id, from, kind, &DropReason::Blocked { guards });
                return Ok(false);
            }
        };

        self.snapshot = Rc::new(Snapshot {
            value: step.to,
            context: step.context,
        });

        let mut focus = Vec::new();
        for effect in step.effects {
            match effect {
                ListboxEffect::Notify { callback, value } => callback(&value),
                ListboxEffect::Focus(target) => focus.push(target),
            }
        }
        for target in focus {
            self.frames.schedule(target);
        }

        self.inspector
            .transition(self.id, kind, from, &self.snapshot);
        self.publish();
        Ok(true)
    }

    /// Deliver an event by name.
    ///
    /// Only kinds without a payload can be sent this way; the commit keys
    /// commit the highlighted option.
    pub fn send_named(&mut self, name: &str) -> Result<bool, HostError> {
        let kind: EventKind = name.parse()?;
        let event = ListboxEvent::bare(kind).ok_or(HostError::PayloadRequired(kind))?;
        self.send(event)
    }

    /// Register a listener for every accepted transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ListboxSnapshot<V>) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether the listener was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Focus requests waiting for [`run_frame`](Self::run_frame).
    pub fn pending_frame_work(&self) -> usize {
        self.frames.len()
    }

    /// Perform the focus requests queued by earlier transitions.
    ///
    /// The navigation option is looked up in the current context, so a
    /// request made before the highlight moved focuses the new option.
    /// Targets that do not resolve or are no longer connected are skipped.
    /// Returns the number of elements focused.
    pub fn run_frame(&mut self) -> usize {
        let mut focused = 0;
        for target in self.frames.drain() {
            match self.resolve(target) {
                Some(element) if self.env.dom().is_connected(element) => {
                    self.env.dom().focus(element);
                    focused += 1;
                }
                element => self.inspector.focus_skipped(self.id, target, element),
            }
        }
        focused
    }

    /// Release listeners and pending frame work. Idempotent.
    pub fn stop(&mut self) {
        if self.status == ServiceStatus::Stopped {
            return;
        }
        self.status = ServiceStatus::Stopped;
        self.listeners.clear();
        self.frames.clear();
        self.inspector.stopped(self.id);
    }

    fn resolve(&self, target: FocusTarget) -> Option<ElementId> {
        match target {
            FocusTarget::Element(element) => Some(element),
            FocusTarget::NavigationOption => self.snapshot.context.navigation_option()?.element,
        }
    }

    fn publish(&mut self) {
        let snapshot = Rc::clone(&self.snapshot);
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl<V: Value> Drop for ListboxService<V> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<V: Value> fmt::Debug for ListboxService<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListboxService")
            .field("id", &self.id)
            .field("status", &self.status)
            .field("snapshot", &self.snapshot)
            .field("listeners", &self.listeners.len())
            .field("pending_frame_work", &self.frames.len())
            .finish_non_exhaustive()
    }
}
