use crate::feed::Reading;

use super::HistoryWindow;

impl HistoryWindow {
    /// Push to the back, evicting from the front until within capacity.
    pub fn append(&mut self, reading: Reading) {
        self.readings.push_back(reading);

        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
    }
}
