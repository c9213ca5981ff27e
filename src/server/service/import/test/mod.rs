use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::DbErr;
use test_utils::archive::{test_verifying_key, SignedArchiveBuilder};

use crate::server::{
    error::import::ImportError,
    model::{
        guild_data::{
            AutoCloseSettings, ClaimSettings, CustomEmbed, EmbedField, GuildMetadata,
            MultiPanel, NamingScheme, Settings, Tag, TicketPermissions,
        },
        import::{
            AccessControlRuleParams, CloseReasonParams, CreateFormInputParams,
            CreatePanelParams, EntityClass, ExitSurveyResponseParams, ImportRequest,
            ImportTicketParams, LastMessageParams,
        },
        premium::PremiumTier,
    },
    service::{
        import::{
            store::{GuildOwnerLookup, ImportStore, MappingStore, PanelBatch, TranscriptStore},
            ImportDependencies, ImportService,
        },
        premium::StaticPremiumLookup,
    },
    validator::ArchiveValidator,
};

mod authorization;
mod guild_data;
mod premium;
mod rerun;
mod transcripts;

const GUILD_ID: u64 = 123;
const OWNER_ID: u64 = 42;

fn store_error(what: &str) -> DbErr {
    DbErr::Custom(format!("{} rejected", what))
}

/// Records written through `ImportStore`.
#[derive(Default)]
struct StoreState {
    next_id: i32,
    existing_panels: u64,
    existing_tickets: u64,
    failing_tags: HashSet<String>,
    failing_forms: HashSet<String>,
    fail_panel_commit: bool,

    language: Option<String>,
    server_blacklist: Option<String>,
    autoclose: Option<AutoCloseSettings>,
    custom_colours: HashMap<i16, i32>,
    tags: HashMap<String, Option<String>>,
    forms: Vec<(i32, String, String)>,
    form_inputs: Vec<(i32, i32)>,
    panels: Vec<(i32, CreatePanelParams)>,
    tickets: Vec<ImportTicketParams>,
}

impl StoreState {
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
struct FakeImportStore {
    state: Arc<Mutex<StoreState>>,
}

impl FakeImportStore {
    fn with_state(configure: impl FnOnce(&mut StoreState)) -> Self {
        let store = Self::default();
        configure(&mut store.state.lock().unwrap());
        store
    }

    fn state(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }
}

struct FakePanelBatch {
    state: Arc<Mutex<StoreState>>,
    pending: Vec<(i32, CreatePanelParams)>,
}

#[async_trait]
impl PanelBatch for FakePanelBatch {
    async fn create(&mut self, params: CreatePanelParams) -> Result<i32, DbErr> {
        let id = self.state.lock().unwrap().allocate_id();
        self.pending.push((id, params));
        Ok(id)
    }

    async fn commit(self: Box<Self>) -> Result<(), DbErr> {
        let Self { state, pending } = *self;
        let mut state = state.lock().unwrap();
        if state.fail_panel_commit {
            return Err(store_error("panel commit"));
        }
        state.panels.extend(pending);
        Ok(())
    }
}

#[async_trait]
impl ImportStore for FakeImportStore {
    async fn set_language(&self, _guild_id: u64, language: &str) -> Result<(), DbErr> {
        self.state().language = Some(language.to_string());
        Ok(())
    }

    async fn set_archive_channel(
        &self,
        _guild_id: u64,
        _channel_id: Option<u64>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_channel_category(&self, _guild_id: u64, _category_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_autoclose(
        &self,
        _guild_id: u64,
        settings: &AutoCloseSettings,
    ) -> Result<(), DbErr> {
        self.state().autoclose = Some(settings.clone());
        Ok(())
    }

    async fn set_claim_settings(
        &self,
        _guild_id: u64,
        _settings: &ClaimSettings,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_close_confirmation(&self, _guild_id: u64, _enabled: bool) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_custom_colour(
        &self,
        _guild_id: u64,
        colour_id: i16,
        value: i32,
    ) -> Result<(), DbErr> {
        self.state().custom_colours.insert(colour_id, value);
        Ok(())
    }

    async fn set_feedback_enabled(&self, _guild_id: u64, _enabled: bool) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_guild_metadata(
        &self,
        _guild_id: u64,
        _metadata: &GuildMetadata,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_naming_scheme(&self, _guild_id: u64, _scheme: NamingScheme) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_ticket_limit(&self, _guild_id: u64, _limit: u8) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_ticket_permissions(
        &self,
        _guild_id: u64,
        _permissions: &TicketPermissions,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_users_can_close(&self, _guild_id: u64, _enabled: bool) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_welcome_message(&self, _guild_id: u64, _message: &str) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_settings(&self, _guild_id: u64, _settings: &Settings) -> Result<(), DbErr> {
        Ok(())
    }

    async fn add_blacklisted_user(&self, _guild_id: u64, _user_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn add_blacklisted_role(&self, _guild_id: u64, _role_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_server_blacklisted(&self, _guild_id: u64, reason: &str) -> Result<(), DbErr> {
        self.state().server_blacklist = Some(reason.to_string());
        Ok(())
    }

    async fn add_on_call_user(&self, _guild_id: u64, _user_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn grant_user_permission(
        &self,
        _guild_id: u64,
        _user_id: u64,
        _support: bool,
        _admin: bool,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn grant_role_permission(
        &self,
        _guild_id: u64,
        _role_id: u64,
        _support: bool,
        _admin: bool,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn create_tag(&self, _guild_id: u64, tag: &Tag) -> Result<(), DbErr> {
        let mut state = self.state();
        if state.failing_tags.contains(&tag.id) {
            return Err(store_error("tag"));
        }
        state.tags.insert(tag.id.clone(), tag.content.clone());
        Ok(())
    }

    async fn create_support_team(&self, _guild_id: u64, _name: &str) -> Result<i32, DbErr> {
        Ok(self.state().allocate_id())
    }

    async fn add_team_member(&self, _team_id: i32, _user_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn add_team_role(&self, _team_id: i32, _role_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn create_form(
        &self,
        _guild_id: u64,
        title: &str,
        custom_id: &str,
    ) -> Result<i32, DbErr> {
        let mut state = self.state();
        if state.failing_forms.contains(title) {
            return Err(store_error("form"));
        }
        let id = state.allocate_id();
        state.forms.push((id, title.to_string(), custom_id.to_string()));
        Ok(id)
    }

    async fn create_form_input(&self, params: CreateFormInputParams) -> Result<i32, DbErr> {
        let mut state = self.state();
        let id = state.allocate_id();
        state.form_inputs.push((id, params.form_id));
        Ok(id)
    }

    async fn create_embed(
        &self,
        _guild_id: u64,
        _embed: &CustomEmbed,
        _fields: &[EmbedField],
    ) -> Result<i32, DbErr> {
        Ok(self.state().allocate_id())
    }

    async fn count_panels(&self, _guild_id: u64) -> Result<u64, DbErr> {
        let state = self.state();
        Ok(state.existing_panels + state.panels.len() as u64)
    }

    async fn begin_panel_batch(&self) -> Result<Box<dyn PanelBatch>, DbErr> {
        Ok(Box::new(FakePanelBatch {
            state: self.state.clone(),
            pending: Vec::new(),
        }))
    }

    async fn set_panel_access_control_rules(
        &self,
        _panel_id: i32,
        _rules: Vec<AccessControlRuleParams>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_panel_mention_user(
        &self,
        _panel_id: i32,
        _should_mention: bool,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn add_panel_role_mention(&self, _panel_id: i32, _role_id: u64) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_panel_teams(&self, _panel_id: i32, _team_ids: Vec<i32>) -> Result<(), DbErr> {
        Ok(())
    }

    async fn create_multi_panel(&self, _guild_id: u64, _panel: &MultiPanel) -> Result<i32, DbErr> {
        Ok(self.state().allocate_id())
    }

    async fn add_multi_panel_target(
        &self,
        _multi_panel_id: i32,
        _panel_id: i32,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn count_tickets(&self, _guild_id: u64) -> Result<u64, DbErr> {
        let state = self.state();
        Ok(state.existing_tickets + state.tickets.len() as u64)
    }

    async fn import_tickets(
        &self,
        _guild_id: u64,
        tickets: Vec<ImportTicketParams>,
    ) -> Result<(), DbErr> {
        self.state().tickets.extend(tickets);
        Ok(())
    }

    async fn import_ticket_members(
        &self,
        _guild_id: u64,
        _members: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn import_last_messages(
        &self,
        _guild_id: u64,
        _messages: Vec<LastMessageParams>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn import_ticket_claims(
        &self,
        _guild_id: u64,
        _claims: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn import_service_ratings(
        &self,
        _guild_id: u64,
        _ratings: Vec<(i32, i16)>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn import_participants(
        &self,
        _guild_id: u64,
        _participants: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_first_response_time(
        &self,
        _guild_id: u64,
        _ticket_id: i32,
        _user_id: u64,
        _response_time: chrono::Duration,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn add_exit_survey_response(
        &self,
        _guild_id: u64,
        _response: ExitSurveyResponseParams,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_close_reason(
        &self,
        _guild_id: u64,
        _reason: CloseReasonParams,
    ) -> Result<(), DbErr> {
        Ok(())
    }

    async fn add_autoclose_excluded(&self, _guild_id: u64, _ticket_id: i32) -> Result<(), DbErr> {
        Ok(())
    }

    async fn set_archive_message(
        &self,
        _guild_id: u64,
        _ticket_id: i32,
        _channel_id: u64,
        _message_id: u64,
    ) -> Result<(), DbErr> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeMappingStore {
    mappings: Mutex<HashMap<EntityClass, HashMap<i32, i32>>>,
    fail_writes: bool,
}

impl FakeMappingStore {
    fn count(&self, class: EntityClass) -> usize {
        self.mappings
            .lock()
            .unwrap()
            .get(&class)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl MappingStore for FakeMappingStore {
    async fn get_mapping(
        &self,
        _guild_id: u64,
    ) -> Result<HashMap<EntityClass, HashMap<i32, i32>>, DbErr> {
        Ok(self.mappings.lock().unwrap().clone())
    }

    async fn set_mapping(
        &self,
        _guild_id: u64,
        class: EntityClass,
        source_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr> {
        if self.fail_writes {
            return Err(store_error("mapping"));
        }
        self.mappings
            .lock()
            .unwrap()
            .entry(class)
            .or_default()
            .entry(source_id)
            .or_insert(target_id);
        Ok(())
    }
}

/// Reports a fixed owner, optionally after a delay.
struct FakeOwnerLookup {
    owner_id: u64,
    delay: Option<Duration>,
}

#[async_trait]
impl GuildOwnerLookup for FakeOwnerLookup {
    async fn get_owner_id(&self, _guild_id: u64) -> Result<u64, ImportError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.owner_id)
    }
}

#[derive(Default)]
struct FakeTranscriptStore {
    stored: Mutex<Vec<(u64, usize)>>,
}

#[async_trait]
impl TranscriptStore for FakeTranscriptStore {
    async fn put_transcripts(&self, guild_id: u64, archive: Vec<u8>) -> std::io::Result<()> {
        self.stored.lock().unwrap().push((guild_id, archive.len()));
        Ok(())
    }
}

/// Fakes behind one `ImportService`.
struct Harness {
    store: Arc<FakeImportStore>,
    mappings: Arc<FakeMappingStore>,
    transcripts: Arc<FakeTranscriptStore>,
    tier: PremiumTier,
    owner_delay: Option<Duration>,
    timeout: Duration,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: Arc::new(FakeImportStore::default()),
            mappings: Arc::new(FakeMappingStore::default()),
            transcripts: Arc::new(FakeTranscriptStore::default()),
            tier: PremiumTier::None,
            owner_delay: None,
            timeout: Duration::from_secs(30),
        }
    }

    fn with_store(mut self, store: FakeImportStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    fn with_mappings(mut self, mappings: FakeMappingStore) -> Self {
        self.mappings = Arc::new(mappings);
        self
    }

    fn with_tier(mut self, tier: PremiumTier) -> Self {
        self.tier = tier;
        self
    }

    fn with_owner_delay(mut self, delay: Duration, timeout: Duration) -> Self {
        self.owner_delay = Some(delay);
        self.timeout = timeout;
        self
    }

    fn service(&self) -> ImportService {
        let deps = ImportDependencies {
            store: self.store.clone(),
            mappings: self.mappings.clone(),
            premium: Arc::new(StaticPremiumLookup(self.tier)),
            owners: Arc::new(FakeOwnerLookup {
                owner_id: OWNER_ID,
                delay: self.owner_delay,
            }),
            transcripts: self.transcripts.clone(),
        };

        ImportService::new(
            Arc::new(ArchiveValidator::from_key(test_verifying_key())),
            deps,
            self.timeout,
        )
    }
}

fn data_archive(document: &serde_json::Value) -> Vec<u8> {
    SignedArchiveBuilder::new()
        .guild_data(document)
        .build()
        .unwrap()
}

fn owner_request(data: Option<Vec<u8>>, transcripts: Option<Vec<u8>>) -> ImportRequest {
    ImportRequest {
        guild_id: GUILD_ID,
        user_id: OWNER_ID,
        data_archive: data,
        transcripts_archive: transcripts,
    }
}
