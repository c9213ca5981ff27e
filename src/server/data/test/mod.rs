mod access;
mod entitlement;
mod guild_setting;
mod import_mapping;
mod import_store;
mod panel;
mod ticket;
