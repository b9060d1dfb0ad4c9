//! Shared widget fixture for the integration tests.

#![allow(dead_code)]

use listbox_machine::dom::{ElementId, HeadlessDom};
use listbox_machine::host::ListboxService;
use listbox_machine::listbox::{callback, Callback, OptionDescriptor, Refs};
use std::cell::RefCell;
use std::rc::Rc;

/// A mounted listbox: a button, and a popover holding the list with two
/// options, plus one element inside the popover and one outside it.
pub struct Widget {
    pub dom: Rc<HeadlessDom>,
    pub refs: Refs,
    pub options: Vec<OptionDescriptor<u32>>,
    pub inside: ElementId,
    pub outside: ElementId,
}

impl Widget {
    pub fn new() -> Self {
        let dom = Rc::new(HeadlessDom::new());
        let doc = dom.document();
        let button = dom.create(doc);
        let popover = dom.create(doc);
        let list = dom.create(popover);
        let apple = dom.create(list);
        let banana = dom.create(list);
        let inside = dom.create(popover);
        let outside = dom.create(doc);

        Self {
            refs: Refs {
                button: Some(button),
                input: None,
                list: Some(list),
                popover: Some(popover),
            },
            options: vec![
                OptionDescriptor::new(1, "Apple").with_element(apple),
                OptionDescriptor::new(2, "Banana").with_element(banana),
            ],
            dom,
            inside,
            outside,
        }
    }

    pub fn button(&self) -> ElementId {
        self.refs.button.unwrap()
    }

    pub fn list(&self) -> ElementId {
        self.refs.list.unwrap()
    }

    pub fn option(&self, index: usize) -> ElementId {
        self.options[index].element.unwrap()
    }

    pub fn service(&self) -> ListboxService<u32> {
        ListboxService::builder(self.dom.clone(), self.refs)
            .options(self.options.clone())
            .build()
            .unwrap()
    }

    pub fn service_with_value(&self, value: u32) -> ListboxService<u32> {
        ListboxService::builder(self.dom.clone(), self.refs)
            .options(self.options.clone())
            .value(value)
            .build()
            .unwrap()
    }
}

/// A callback that records every value it receives.
pub fn recorder() -> (Callback<u32>, Rc<RefCell<Vec<u32>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (callback(move |value: &u32| sink.borrow_mut().push(*value)), calls)
}
