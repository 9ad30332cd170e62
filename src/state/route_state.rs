// ============================================================================
// ROUTE STATE - Inputs and last result of the route view
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::RoutePlan;
use crate::state::reactivity::{GenerationCounter, RefreshToken};

#[derive(Clone)]
pub struct RouteState {
    pub origin: Rc<RefCell<String>>,
    pub destination: Rc<RefCell<String>>,
    pub plan: Rc<RefCell<Option<RoutePlan>>>,
    pub calculating: Rc<RefCell<bool>>,
    generations: GenerationCounter,
}

impl RouteState {
    pub fn new() -> Self {
        Self {
            origin: Rc::new(RefCell::new(String::new())),
            destination: Rc::new(RefCell::new(String::new())),
            plan: Rc::new(RefCell::new(None)),
            calculating: Rc::new(RefCell::new(false)),
            generations: GenerationCounter::new(),
        }
    }

    pub fn set_origin(&self, value: &str) {
        *self.origin.borrow_mut() = value.to_string();
    }

    pub fn set_destination(&self, value: &str) {
        *self.destination.borrow_mut() = value.to_string();
    }

    pub fn inputs(&self) -> (String, String) {
        (self.origin.borrow().clone(), self.destination.borrow().clone())
    }

    pub fn begin_calculation(&self) -> RefreshToken {
        *self.calculating.borrow_mut() = true;
        self.generations.next()
    }

    /// Store a finished plan (or clear on failure) if `token` is the newest calculation
    pub fn finish_calculation(&self, token: RefreshToken, plan: Option<RoutePlan>) -> bool {
        if !self.generations.is_current(token) {
            return false;
        }
        *self.calculating.borrow_mut() = false;
        if plan.is_some() {
            *self.plan.borrow_mut() = plan;
        }
        true
    }

    pub fn get_plan(&self) -> Option<RoutePlan> {
        self.plan.borrow().clone()
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}
