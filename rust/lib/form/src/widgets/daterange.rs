use chrono::NaiveDate;
use staykit_types::DateRangeValue;

use super::Controlled;

/// Two-click range picker in a popover.
#[derive(Debug, Clone)]
pub struct DateRangePicker {
    value: Controlled<DateRangeValue>,
    open: bool,
    pending_start: Option<NaiveDate>,
}

impl DateRangePicker {
    pub fn controlled(value: DateRangeValue) -> Self {
        Self { value: Controlled::controlled(value), open: false, pending_start: None }
    }

    pub fn uncontrolled(default: DateRangeValue) -> Self {
        Self { value: Controlled::uncontrolled(default), open: false, pending_start: None }
    }

    pub fn value(&self) -> &DateRangeValue {
        self.value.get()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn pending_start(&self) -> Option<NaiveDate> {
        self.pending_start
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing abandons a half-picked range.
    pub fn close(&mut self) {
        self.open = false;
        self.pending_start = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle a click on a day. Returns the range to emit once both ends
    /// are picked; the popover closes at that point.
    pub fn pick(&mut self, date: NaiveDate) -> Option<DateRangeValue> {
        match self.pending_start {
            Some(start) if date >= start => {
                self.pending_start = None;
                self.open = false;
                Some(self.value.set(DateRangeValue::new(Some(start), Some(date))))
            }
            _ => {
                self.pending_start = Some(date);
                None
            }
        }
    }

    pub fn clear(&mut self) -> DateRangeValue {
        self.pending_start = None;
        self.value.set(DateRangeValue::default())
    }

    pub fn sync(&mut self, value: DateRangeValue) {
        self.value.sync(value);
    }
}
