pub struct TicketsServiceConfig {
    /// Number of decimal digits in generated ticket ids
    pub ticket_id_len: usize,
    /// How many freshly generated ids are tried before giving up on insert
    pub ticket_id_max_attempts: u32,
    pub max_phone_number_len: usize,
}

impl Default for TicketsServiceConfig {
    fn default() -> Self {
        Self {
            ticket_id_len: 10,
            ticket_id_max_attempts: 5,
            max_phone_number_len: 10,
        }
    }
}
