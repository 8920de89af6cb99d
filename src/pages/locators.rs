//! Every selector the page objects use. The console markup is not a stable
//! contract; when firmware changes a page, this is the file to edit.

pub mod login {
    pub const AUTH_PATH: &str = "/authenticate";
    pub const PASSWORD: &str = "input[placeholder='Password'], input[name='sts_password']";
    pub const SUBMIT: &str = "button:has-text('Submit'), input[type='submit']";
    pub const ERROR: &str =
        "text=/Incorrect password|Authentication failed|Invalid password|Login failed|Access denied/i";
}

pub mod unlock {
    pub const CONFIGURE_LINK: &str = "a[title*='locked']:has-text('Configure'), a:has-text('Configure')";
    pub const PASSWORD: &str =
        "input[placeholder='Password'], input[name='cfg_password'], input[type='password']";
    pub const SUBMIT: &str = "button:has-text('Submit'), input[type='submit']";
}

pub mod dashboard {
    pub const TABLES: &str = "table";
    /// The third status table holds model, serial and firmware rows.
    pub const DEVICE_INFO_TABLE: &str = "table >> nth=2";
    pub const MODEL_KEY: &str = "Model Number";
    pub const LOCKED_INDICATOR: &str = "a[title*='locked']";
}

pub mod nav {
    pub fn section_link(label: &str) -> String {
        format!("a:has-text('{}')", label)
    }
}

pub mod panel {
    pub fn collapse(id: &str) -> String {
        format!("#{}_collapse", id)
    }

    pub fn toggle(id: &str) -> String {
        format!("a[href='#{}_collapse']", id)
    }
}

pub mod general {
    pub fn field(name: &str) -> String {
        format!("input[name='{}']", name)
    }
}

pub mod network {
    pub const GATEWAY: &str = "input[name='gateway']";
    pub const MODE: &str = "select[name='mode']";

    pub fn interface_ip(iface: &str) -> String {
        format!("input[name='ip_{}']", iface)
    }
}

pub mod ptp {
    pub fn profile(port: &str) -> String {
        format!("select#{}_profile", port)
    }

    pub fn field(port: &str, field: &str) -> String {
        format!("input[name='{}_{}']", field, port)
    }

    pub fn delay_mechanism(port: &str) -> String {
        format!("select[name='delay_mechanism_{}']", port)
    }

    pub fn network_transport(port: &str) -> String {
        format!("select[name='network_transport_{}']", port)
    }
}

pub mod snmp {
    pub const RO_COMMUNITY_1: &str = "input[name='ro_community1']";
    pub const RO_COMMUNITY_2: &str = "input[name='ro_community2']";
    pub const TRAP_COMMUNITY: &str = "input[name='trap_community']";
    pub const TRAP_DESTINATION: &str = "input[name*='trap_dest']";
    pub const V3_ENABLE: &str = "input[name*='v3'][type='checkbox']";
    pub const AUTH_NAME: &str = "input[name='auth_name']";

    /// Sections are numbered 1 (v1/v2c), 2 (traps), 3 (v3).
    pub fn save(section: u8) -> String {
        format!("button#button_save_{0}, input#button_save_{0}", section)
    }

    pub fn cancel(section: u8) -> String {
        format!("button#button_cancel_{0}, input#button_cancel_{0}", section)
    }
}

pub mod syslog {
    pub const ENABLE_CHECKBOXES: &str = "input[type='checkbox']";
    pub const SERVERS: &str = "input[name*='server'], input[name*='syslog'][type='text']";
    pub const PORTS: &str = "input[name*='port']";
    pub const FACILITY: &str = "select[name*='facility']";
    pub const SEVERITY: &str = "select[name*='severity'], select[name*='level']";

    /// Targets are `a` and `b`.
    pub fn protocol(target: char) -> String {
        format!("select[name='protocol_{}']", target)
    }
}

pub mod time {
    pub const TIMEZONE: &str = "select[name='timezones']";
    pub const TIMEZONE_PANEL: &str = "timezone";
    pub const DST_ENABLE: &str = "input[name='dst_enable']";
}

pub mod gnss {
    pub const SAVE: &str = "button#button_save_gnss";

    pub fn constellation(name: &str) -> String {
        format!("input[name='{}']", name)
    }
}

pub mod display {
    pub const MODES: u8 = 5;

    /// Modes are numbered 1 to 5.
    pub fn mode(n: u8) -> String {
        format!("input[name='mode{}']", n)
    }
}

pub mod upload {
    pub const FILE_INPUT: &str = "input[type='file'][name='file[]']";
    pub const SUBMIT: &str = "input[type='submit'], button[type='submit']";
    pub const SUCCESS: &str = "text=/complete|finished|done/i";
    pub const FAILURE: &str = "text=/error|rejected|denied/i";
}

pub mod session {
    pub const MODAL: &str = "[class*='modal'], [id*='modal'], .modal-dialog";
    pub const EXPIRY_TEXT: &str = "text=/session|expire|timeout/i";
    pub const COUNTDOWN: &str = "[class*='countdown'], [id*='timer']";
    pub const EXTEND: &str = "button:has-text('Extend'), a:has-text('Extend')";
    pub const LOGOUT: &str =
        "a[href*='logout'], a[href*='signout'], a[href*='authenticate'], button:has-text('Logout')";
}

pub mod outputs {
    pub fn signal(channel: u8) -> String {
        format!("select[name='signal{}']", channel)
    }

    pub fn time_reference(channel: u8, reference: &str) -> String {
        format!("input[name='time{}'][value='{}']", channel, reference)
    }
}

pub mod access {
    pub const STATUS_PASSWORD: &str = "input[name='stspwd']";
    pub const CONFIG_PASSWORD: &str = "input[name='cfgpwd']";
    pub const UPLOAD_PASSWORD: &str = "input[name='uplpwd']";
    pub const ENFORCE_HTTPS: &str = "select[name='enforce_https']";
}

pub mod form {
    pub const SAVE: &str = "button#button_save, input#button_save";
    pub const CANCEL: &str = "button#button_cancel, input#button_cancel";
}
