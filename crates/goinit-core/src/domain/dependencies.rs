//! Dependency resolution: configuration → pinned Go module set.
//!
//! Versions come from static tables; nothing is looked up online.
//!
//! # Rule order
//!
//! [`resolve`] applies these rules in order, each inserting or overwriting
//! entries of one [`DependencySet`]:
//!
//! 1. router selector
//! 2. logger selector
//! 3. database toggle (driver chosen from hints in the free-form names)
//! 4. hexagonal structure (`google/uuid`)
//! 5. redis toggle
//! 6. jwt toggle
//! 7. free-form names, in caller order
//!
//! Later rules win. The router frameworks form an exclusive [`PinGroup`]:
//! pinning one removes any other member, so a free-form "Gin Web Framework"
//! replaces the chi pin that the router selector put there.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::configuration::Configuration;
use crate::domain::value_objects::{Logger, Router, Structure};

// ── Pins ─────────────────────────────────────────────────────────────────────

/// Packages that occupy the same slot in a dependency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinGroup {
    /// chi, gin, echo, fiber: one HTTP framework per service.
    RouterFramework,
}

impl PinGroup {
    pub fn members(&self) -> &'static [Pin] {
        match self {
            Self::RouterFramework => &ROUTER_FRAMEWORKS,
        }
    }
}

/// A module path pinned to a fixed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub module: &'static str,
    pub version: &'static str,
    pub group: Option<PinGroup>,
}

impl Pin {
    pub const fn new(module: &'static str, version: &'static str) -> Self {
        Self {
            module,
            version,
            group: None,
        }
    }

    const fn grouped(module: &'static str, version: &'static str, group: PinGroup) -> Self {
        Self {
            module,
            version,
            group: Some(group),
        }
    }
}

pub const CHI: Pin = Pin::grouped("github.com/go-chi/chi/v5", "v5.0.11", PinGroup::RouterFramework);
pub const GIN: Pin = Pin::grouped("github.com/gin-gonic/gin", "v1.9.1", PinGroup::RouterFramework);
pub const ECHO: Pin = Pin::grouped(
    "github.com/labstack/echo/v4",
    "v4.11.4",
    PinGroup::RouterFramework,
);
pub const FIBER: Pin = Pin::grouped(
    "github.com/gofiber/fiber/v2",
    "v2.52.0",
    PinGroup::RouterFramework,
);

static ROUTER_FRAMEWORKS: [Pin; 4] = [CHI, GIN, ECHO, FIBER];

pub const ZEROLOG: Pin = Pin::new("github.com/rs/zerolog", "v1.32.0");
pub const ZAP: Pin = Pin::new("go.uber.org/zap", "v1.26.0");
pub const LOGRUS: Pin = Pin::new("github.com/sirupsen/logrus", "v1.9.3");

pub const PGX: Pin = Pin::new("github.com/jackc/pgx/v5", "v5.5.1");
pub const MYSQL: Pin = Pin::new("github.com/go-sql-driver/mysql", "v1.7.1");
pub const SQLITE: Pin = Pin::new("github.com/mattn/go-sqlite3", "v1.14.19");

pub const UUID: Pin = Pin::new("github.com/google/uuid", "v1.5.0");
pub const GO_REDIS: Pin = Pin::new("github.com/redis/go-redis/v9", "v9.4.0");
pub const JWT: Pin = Pin::new("github.com/golang-jwt/jwt/v5", "v5.2.0");

/// Substring hints (matched against lowercased names) → database driver.
/// Scanned name by name; the first name carrying any hint decides.
static DATABASE_HINTS: [(&str, Pin); 4] = [
    ("postgres", PGX),
    ("pgx", PGX),
    ("mysql", MYSQL),
    ("sqlite", SQLITE),
];

/// Free-form library names the resolver understands. Matching is exact and
/// case-sensitive; a module path is accepted in place of its display name.
pub static LIBRARIES: [(&str, Pin); 29] = [
    // Web
    ("Chi Router", CHI),
    ("Gin Web Framework", GIN),
    ("Echo", ECHO),
    ("Fiber", FIBER),
    ("Gorilla Mux", Pin::new("github.com/gorilla/mux", "v1.8.1")),
    ("Templ", Pin::new("github.com/a-h/templ", "v0.2.543")),
    ("Pongo2", Pin::new("github.com/flosch/pongo2/v6", "v6.0.0")),
    // Databases
    ("PostgreSQL Driver (pgx)", PGX),
    ("MySQL Driver", MYSQL),
    ("GORM", Pin::new("gorm.io/gorm", "v1.25.5")),
    ("sqlx", Pin::new("github.com/jmoiron/sqlx", "v1.3.5")),
    ("SQLite Driver", SQLITE),
    // Storage
    ("Redis Client (go-redis)", GO_REDIS),
    (
        "MongoDB Driver",
        Pin::new("go.mongodb.org/mongo-driver", "v1.13.1"),
    ),
    ("BadgerDB", Pin::new("github.com/dgraph-io/badger/v4", "v4.2.0")),
    // Logging
    ("Zerolog", ZEROLOG),
    ("Zap", ZAP),
    ("Logrus", LOGRUS),
    // Observability
    (
        "Prometheus Client",
        Pin::new("github.com/prometheus/client_golang", "v1.18.0"),
    ),
    ("OpenTelemetry", Pin::new("go.opentelemetry.io/otel", "v1.22.0")),
    (
        "Jaeger Client",
        Pin::new(
            "github.com/jaegertracing/jaeger-client-go",
            "v2.30.0+incompatible",
        ),
    ),
    // Messaging
    (
        "RabbitMQ Client",
        Pin::new("github.com/rabbitmq/amqp091-go", "v1.9.0"),
    ),
    (
        "Kafka Client (Sarama)",
        Pin::new("github.com/IBM/sarama", "v1.42.2"),
    ),
    ("NATS", Pin::new("github.com/nats-io/nats.go", "v1.31.0")),
    // Misc
    (
        "Gorilla WebSocket",
        Pin::new("github.com/gorilla/websocket", "v1.5.1"),
    ),
    ("JWT-Go", JWT),
    // Testing
    ("Testify", Pin::new("github.com/stretchr/testify", "v1.8.4")),
    ("GoMock", Pin::new("go.uber.org/mock", "v0.4.0")),
    ("Ginkgo", Pin::new("github.com/onsi/ginkgo/v2", "v2.15.0")),
];

/// Look a free-form name up by display name, then by module path.
pub fn lookup_library(name: &str) -> Option<Pin> {
    LIBRARIES
        .iter()
        .find(|(display, _)| *display == name)
        .or_else(|| LIBRARIES.iter().find(|(_, pin)| pin.module == name))
        .map(|(_, pin)| *pin)
}

// ── DependencySet ────────────────────────────────────────────────────────────

/// Module path → version. Iteration and serialization are sorted by path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DependencySet {
    pins: BTreeMap<String, String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `pin`, evicting other members of its group.
    pub fn pin(&mut self, pin: &Pin) {
        if let Some(group) = pin.group {
            for member in group.members() {
                if member.module != pin.module {
                    self.pins.remove(member.module);
                }
            }
        }
        self.pins
            .insert(pin.module.to_string(), pin.version.to_string());
    }

    pub fn version_of(&self, module: &str) -> Option<&str> {
        self.pins.get(module).map(String::as_str)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.pins.contains_key(module)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// `(module, version)` pairs sorted by module path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pins.iter().map(|(m, v)| (m.as_str(), v.as_str()))
    }
}

// ── Rules ────────────────────────────────────────────────────────────────────

type Rule = fn(&Configuration, &mut DependencySet);

static RULES: [Rule; 7] = [
    router_rule,
    logger_rule,
    database_rule,
    hexagonal_rule,
    redis_rule,
    jwt_rule,
    free_form_rule,
];

fn router_rule(config: &Configuration, deps: &mut DependencySet) {
    let pin = match config.router() {
        Router::Chi => CHI,
        Router::Gin => GIN,
        Router::Echo => ECHO,
        Router::Fiber => FIBER,
        Router::Stdlib => return,
    };
    deps.pin(&pin);
}

fn logger_rule(config: &Configuration, deps: &mut DependencySet) {
    let pin = match config.logger() {
        Logger::Zerolog => ZEROLOG,
        Logger::Zap => ZAP,
        Logger::Logrus => LOGRUS,
        Logger::Slog | Logger::Stdlib => return,
    };
    deps.pin(&pin);
}

fn database_rule(config: &Configuration, deps: &mut DependencySet) {
    if !config.use_database() {
        return;
    }

    let hinted = config.dependencies().iter().find_map(|name| {
        let lower = name.to_lowercase();
        DATABASE_HINTS
            .iter()
            .find(|(hint, _)| lower.contains(hint))
            .map(|(_, pin)| *pin)
    });

    deps.pin(&hinted.unwrap_or(PGX));
}

fn hexagonal_rule(config: &Configuration, deps: &mut DependencySet) {
    if config.structure() == Structure::Hexagonal {
        deps.pin(&UUID);
    }
}

fn redis_rule(config: &Configuration, deps: &mut DependencySet) {
    if config.use_redis() {
        deps.pin(&GO_REDIS);
    }
}

fn jwt_rule(config: &Configuration, deps: &mut DependencySet) {
    if config.use_jwt() {
        deps.pin(&JWT);
    }
}

fn free_form_rule(config: &Configuration, deps: &mut DependencySet) {
    for pin in config
        .dependencies()
        .iter()
        .filter_map(|name| lookup_library(name))
    {
        deps.pin(&pin);
    }
}

/// Resolve the pinned dependency set of `config`.
pub fn resolve(config: &Configuration) -> DependencySet {
    let mut deps = DependencySet::new();
    for rule in &RULES {
        rule(config, &mut deps);
    }
    deps
}
