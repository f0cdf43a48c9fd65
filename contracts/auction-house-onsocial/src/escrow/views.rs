use crate::*;

#[near]
impl Contract {
    pub fn get_escrow_record(&self, capability_id: u64) -> Option<EscrowRecord> {
        self.escrow_records.get(&capability_id).cloned()
    }
}
