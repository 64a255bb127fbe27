use crate::core::calculator::compute_gestational_state;
use crate::core::growth::growth_figures;
use crate::core::milestones::MilestoneTable;
use crate::core::timeline::journey;
use crate::domain::model::{
    Account, DevelopmentalMilestone, GestationalState, GrowthFigures, JourneyCheckpoint,
    PatientProfile, PregnancyAnchor, Role, Trimester, User,
};
use crate::domain::ports::{Clock, ConfigProvider, ProfileRepository, Storage};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{
    validate_date_of_birth, validate_due_date, validate_email, validate_last_menstrual_period,
    validate_phone_number, validate_required_text,
};
use chrono::NaiveDate;
use serde::Serialize;

/// 病患儀表板所需的全部內容
#[derive(Debug, Clone, Serialize)]
pub struct PregnancyOverview {
    pub reference_date: NaiveDate,
    pub state: Option<GestationalState>,
    pub milestone: DevelopmentalMilestone,
    pub growth: Option<GrowthFigures>,
    pub journey: Vec<JourneyCheckpoint>,
}

impl PregnancyOverview {
    /// 起算日缺漏或在未來，畫面應提示補齊個人資料
    pub fn is_incomplete(&self) -> bool {
        self.state.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CareTeamSummary {
    pub first_trimester: usize,
    pub second_trimester: usize,
    pub third_trimester: usize,
    pub incomplete_profiles: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub total_accounts: usize,
    pub patients: usize,
    pub clinicians: usize,
    pub admins: usize,
    pub inactive_accounts: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Dashboard {
    Patient {
        age: Option<u32>,
        overview: PregnancyOverview,
    },
    Clinician(CareTeamSummary),
    Admin(AdminSummary),
}

pub struct TrackerService<C: Clock> {
    clock: C,
    milestones: MilestoneTable,
}

impl<C: Clock> TrackerService<C> {
    pub fn new(clock: C, milestones: MilestoneTable) -> Self {
        Self { clock, milestones }
    }

    /// 依設定載入里程碑表；未指定檔案時使用內建表
    pub fn from_config<P: ConfigProvider, S: Storage>(
        config: &P,
        storage: &S,
        clock: C,
    ) -> Result<Self> {
        let milestones = match config.milestones_file() {
            Some(path) => MilestoneTable::load(storage, path)?,
            None => MilestoneTable::builtin(),
        };
        Ok(Self::new(clock, milestones))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn milestones(&self) -> &MilestoneTable {
        &self.milestones
    }

    pub fn overview(&self, anchor: &PregnancyAnchor) -> PregnancyOverview {
        self.overview_on(anchor, self.clock.today())
    }

    pub fn overview_on(&self, anchor: &PregnancyAnchor, reference_date: NaiveDate) -> PregnancyOverview {
        let state = compute_gestational_state(anchor, reference_date);
        let week = state.as_ref().map(|s| s.week);

        match &state {
            Some(state) => tracing::debug!(
                week = state.week,
                day = state.day_of_week,
                trimester = state.trimester.number(),
                "Computed gestational state"
            ),
            None if anchor.is_empty() => tracing::debug!("No pregnancy anchor set"),
            None => tracing::debug!("Pregnancy anchor is after {}", reference_date),
        }

        PregnancyOverview {
            reference_date,
            milestone: self.milestones.lookup(week).clone(),
            growth: week.and_then(growth_figures),
            journey: journey(state.as_ref()),
            state,
        }
    }

    pub fn week_info(&self, week: Option<u32>) -> &DevelopmentalMilestone {
        self.milestones.lookup(week)
    }

    /// 依角色產生儀表板。`roster` 為可見的帳號清單，僅醫護與管理者使用
    pub fn dashboard(&self, account: &Account, roster: &[Account]) -> Dashboard {
        let today = self.clock.today();

        match account.profile.role {
            Role::Patient => Dashboard::Patient {
                age: account.profile.age_on(today),
                overview: self.overview_on(&account.profile.anchor, today),
            },
            Role::Clinician => Dashboard::Clinician(care_team_summary(roster, today)),
            Role::Admin => Dashboard::Admin(admin_summary(roster)),
        }
    }
}

fn care_team_summary(roster: &[Account], today: NaiveDate) -> CareTeamSummary {
    let mut summary = CareTeamSummary::default();

    for account in roster.iter().filter(|a| a.profile.role == Role::Patient) {
        match compute_gestational_state(&account.profile.anchor, today).map(|s| s.trimester) {
            Some(Trimester::First) => summary.first_trimester += 1,
            Some(Trimester::Second) => summary.second_trimester += 1,
            Some(Trimester::Third) => summary.third_trimester += 1,
            None => summary.incomplete_profiles += 1,
        }
    }

    summary
}

fn admin_summary(roster: &[Account]) -> AdminSummary {
    let mut summary = AdminSummary {
        total_accounts: roster.len(),
        ..AdminSummary::default()
    };

    for account in roster {
        match account.profile.role {
            Role::Patient => summary.patients += 1,
            Role::Clinician => summary.clinicians += 1,
            Role::Admin => summary.admins += 1,
        }
        if !account.user.is_active {
            summary.inactive_accounts += 1;
        }
    }

    summary
}

#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub anchor: PregnancyAnchor,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
}

/// 建立使用者與其個人檔案，一次寫入
pub struct AccountService<R: ProfileRepository, C: Clock> {
    repository: R,
    clock: C,
}

impl<R: ProfileRepository, C: Clock> AccountService<R, C> {
    pub fn new(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn register(&self, request: RegistrationRequest) -> Result<Account> {
        let today = self.clock.today();

        validate_required_text("username", &request.username)?;
        validate_email("email", &request.email)?;
        let phone_number = request
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(|phone| validate_phone_number("phone_number", phone).map(|_| phone.to_string()))
            .transpose()?;
        if let Some(due_date) = request.anchor.due_date {
            validate_due_date(due_date, today)?;
        }
        if let Some(lmp) = request.anchor.last_menstrual_period {
            validate_last_menstrual_period(lmp, today)?;
        }
        if let Some(date_of_birth) = request.date_of_birth {
            validate_date_of_birth(date_of_birth, today)?;
        }

        let username = request.username.trim().to_string();
        if self.repository.find(&username)?.is_some() {
            return Err(TrackerError::DuplicateAccountError { username });
        }

        let account = Account {
            user: User {
                username,
                email: request.email.trim().to_lowercase(),
                first_name: request.first_name,
                last_name: request.last_name,
                is_active: false,
            },
            profile: PatientProfile {
                role: request.role,
                anchor: request.anchor,
                date_of_birth: request.date_of_birth,
                phone_number,
            },
        };

        self.repository.insert(account.clone())?;
        tracing::info!(
            "Registered {} account '{}'",
            account.profile.role.label(),
            account.user.username
        );

        Ok(account)
    }
}
