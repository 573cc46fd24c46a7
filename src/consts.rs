pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Grouped by functional area.

    // =============================================================================
    // STORAGE
    // =============================================================================

    /// Directory in the user's home holding the client configuration.
    pub const CONFIG_DIR: &str = ".kiakart";

    /// File name of the client configuration.
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // EVENT QUEUES
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying request outcomes back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DASHBOARD
    // =============================================================================

    /// Number of orders shown in the dashboard's "recent orders" table.
    pub const RECENT_ORDERS: usize = 5;

    /// Product categories offered by the product form.
    pub const CATEGORIES: &[&str] = &[
        "Electronics",
        "Clothing",
        "Home & Kitchen",
        "Books",
        "Sports",
        "Beauty",
        "Toys",
        "Grocery",
        "Other",
    ];

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Fallback message when a failed response carries no readable message.
    pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

    /// HTTP client timeouts
    pub mod http {
        use std::time::Duration;

        /// Connection establishment timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds). Image uploads need the headroom.
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 1500;

        /// Key polling interval of the UI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
