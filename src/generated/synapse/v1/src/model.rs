// Copyright 2025 Azure Rust Client Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Code generated from the Synapse Artifacts REST schema. Manual changes will
// be lost on regeneration.

use wkt::Optional;

/// An expression that evaluates at pipeline run time.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Expression {
    /// The expression text. Required by the schema.
    pub value: Optional<String>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][crate::model::Expression::value].
    pub fn set_value<V: Into<String>>(mut self, v: V) -> Self {
        self.value = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for Expression {
    fn type_name() -> &'static str {
        "Expression"
    }
}

impl std::fmt::Debug for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Expression");
        debug_struct.field("value", &self.value);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// An activity dependency condition.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ActivityDependency {
    /// The name of the activity this dependency points at.
    pub activity: Optional<String>,

    /// Match conditions, e.g. `Succeeded` or `Failed`.
    pub dependency_conditions: Optional<Vec<String>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl ActivityDependency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of
    /// [activity][crate::model::ActivityDependency::activity].
    pub fn set_activity<V: Into<String>>(mut self, v: V) -> Self {
        self.activity = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [dependency_conditions][crate::model::ActivityDependency::dependency_conditions].
    pub fn set_dependency_conditions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dependency_conditions = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::model::Model for ActivityDependency {
    fn type_name() -> &'static str {
        "ActivityDependency"
    }
}

impl std::fmt::Debug for ActivityDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ActivityDependency");
        debug_struct.field("activity", &self.activity);
        debug_struct.field("dependency_conditions", &self.dependency_conditions);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// A user-defined property on an activity.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UserProperty {
    /// The property name.
    pub name: Optional<String>,

    /// The property value. Free-form.
    pub value: Optional<serde_json::Value>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl UserProperty {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][crate::model::UserProperty::name].
    pub fn set_name<V: Into<String>>(mut self, v: V) -> Self {
        self.name = Optional::set(v.into());
        self
    }

    /// Sets the value of [value][crate::model::UserProperty::value].
    pub fn set_value<V: Into<serde_json::Value>>(mut self, v: V) -> Self {
        self.value = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for UserProperty {
    fn type_name() -> &'static str {
        "UserProperty"
    }
}

impl std::fmt::Debug for UserProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UserProperty");
        debug_struct.field("name", &self.name);
        debug_struct.field("value", &self.value);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// A pipeline activity.
///
/// The wire representation carries a `type` property selecting the subtype.
/// Subtypes added by the service after this crate was generated decode into
/// [Activity::Unknown]; the raw discriminator and the base fields remain
/// accessible, and the payload round-trips unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Activity {
    /// `type: "Until"`.
    Until(UntilActivity),
    /// `type: "Wait"`.
    Wait(WaitActivity),
    /// Any discriminator value this crate does not know.
    Unknown(UnknownActivity),
}

impl Activity {
    /// The raw discriminator value.
    pub fn activity_type(&self) -> &str {
        match self {
            Self::Until(_) => "Until",
            Self::Wait(_) => "Wait",
            Self::Unknown(a) => a.activity_type.value().map_or("", String::as_str),
        }
    }

    /// The activity name, common to all subtypes.
    pub fn name(&self) -> &Optional<String> {
        match self {
            Self::Until(a) => &a.name,
            Self::Wait(a) => &a.name,
            Self::Unknown(a) => &a.name,
        }
    }

    /// The activity description, common to all subtypes.
    pub fn description(&self) -> &Optional<String> {
        match self {
            Self::Until(a) => &a.description,
            Self::Wait(a) => &a.description,
            Self::Unknown(a) => &a.description,
        }
    }

    /// The activity dependencies, common to all subtypes.
    pub fn depends_on(&self) -> &Optional<Vec<ActivityDependency>> {
        match self {
            Self::Until(a) => &a.depends_on,
            Self::Wait(a) => &a.depends_on,
            Self::Unknown(a) => &a.depends_on,
        }
    }

    /// The user properties, common to all subtypes.
    pub fn user_properties(&self) -> &Optional<Vec<UserProperty>> {
        match self {
            Self::Until(a) => &a.user_properties,
            Self::Wait(a) => &a.user_properties,
            Self::Unknown(a) => &a.user_properties,
        }
    }
}

impl wkt::model::Model for Activity {
    fn type_name() -> &'static str {
        "Activity"
    }
}

impl From<UntilActivity> for Activity {
    fn from(value: UntilActivity) -> Self {
        Self::Until(value)
    }
}

impl From<WaitActivity> for Activity {
    fn from(value: WaitActivity) -> Self {
        Self::Wait(value)
    }
}

/// An activity that executes inner activities until an expression evaluates
/// to true or a timeout is reached, whichever is earlier.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UntilActivity {
    /// Activity name. Required by the schema.
    pub name: Optional<String>,

    /// Activity description.
    pub description: Optional<String>,

    /// Activity depends-on conditions.
    pub depends_on: Optional<Vec<ActivityDependency>>,

    /// Activity user properties.
    pub user_properties: Optional<Vec<UserProperty>>,

    /// The loop continues until this expression evaluates to true.
    /// Required by the schema.
    pub expression: Optional<Expression>,

    /// The timeout for the activity to run. Free-form: a literal duration
    /// string such as `"7.00:00:00"` or an expression object. The schema
    /// marks it non-nullable, so an explicit JSON null here fails
    /// serialization.
    pub timeout: Optional<serde_json::Value>,

    /// The inner activities to execute.
    pub activities: Optional<Vec<Activity>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl UntilActivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][crate::model::UntilActivity::name].
    pub fn set_name<V: Into<String>>(mut self, v: V) -> Self {
        self.name = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [description][crate::model::UntilActivity::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.description = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [depends_on][crate::model::UntilActivity::depends_on].
    pub fn set_depends_on<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ActivityDependency>,
    {
        self.depends_on = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of
    /// [user_properties][crate::model::UntilActivity::user_properties].
    pub fn set_user_properties<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<UserProperty>,
    {
        self.user_properties = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of
    /// [expression][crate::model::UntilActivity::expression].
    pub fn set_expression<V: Into<Expression>>(mut self, v: V) -> Self {
        self.expression = Optional::set(v.into());
        self
    }

    /// Sets the value of [timeout][crate::model::UntilActivity::timeout].
    pub fn set_timeout<V: Into<serde_json::Value>>(mut self, v: V) -> Self {
        self.timeout = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [activities][crate::model::UntilActivity::activities].
    pub fn set_activities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Activity>,
    {
        self.activities = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::model::Model for UntilActivity {
    fn type_name() -> &'static str {
        "UntilActivity"
    }
}

impl std::fmt::Debug for UntilActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UntilActivity");
        debug_struct.field("name", &self.name);
        debug_struct.field("description", &self.description);
        debug_struct.field("depends_on", &self.depends_on);
        debug_struct.field("user_properties", &self.user_properties);
        debug_struct.field("expression", &self.expression);
        debug_struct.field("timeout", &self.timeout);
        debug_struct.field("activities", &self.activities);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// An activity that pauses pipeline execution for a period of time.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct WaitActivity {
    /// Activity name. Required by the schema.
    pub name: Optional<String>,

    /// Activity description.
    pub description: Optional<String>,

    /// Activity depends-on conditions.
    pub depends_on: Optional<Vec<ActivityDependency>>,

    /// Activity user properties.
    pub user_properties: Optional<Vec<UserProperty>>,

    /// Duration to wait, in seconds.
    pub wait_time_in_seconds: Optional<i64>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl WaitActivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][crate::model::WaitActivity::name].
    pub fn set_name<V: Into<String>>(mut self, v: V) -> Self {
        self.name = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [description][crate::model::WaitActivity::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.description = Optional::set(v.into());
        self
    }

    /// Sets the value of
    /// [depends_on][crate::model::WaitActivity::depends_on].
    pub fn set_depends_on<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ActivityDependency>,
    {
        self.depends_on = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of
    /// [user_properties][crate::model::WaitActivity::user_properties].
    pub fn set_user_properties<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<UserProperty>,
    {
        self.user_properties = Optional::set(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of
    /// [wait_time_in_seconds][crate::model::WaitActivity::wait_time_in_seconds].
    pub fn set_wait_time_in_seconds<V: Into<i64>>(mut self, v: V) -> Self {
        self.wait_time_in_seconds = Optional::set(v.into());
        self
    }
}

impl wkt::model::Model for WaitActivity {
    fn type_name() -> &'static str {
        "WaitActivity"
    }
}

impl std::fmt::Debug for WaitActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("WaitActivity");
        debug_struct.field("name", &self.name);
        debug_struct.field("description", &self.description);
        debug_struct.field("depends_on", &self.depends_on);
        debug_struct.field("user_properties", &self.user_properties);
        debug_struct.field("wait_time_in_seconds", &self.wait_time_in_seconds);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

/// An activity whose `type` value this crate does not know.
///
/// The base activity fields remain accessible; everything else, including
/// the subtype-specific properties, is retained in the unknown-field map so
/// the payload round-trips unchanged.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UnknownActivity {
    /// The raw discriminator value from the payload, kept even when it is
    /// the empty string so the key round-trips.
    pub activity_type: Optional<String>,

    /// Activity name.
    pub name: Optional<String>,

    /// Activity description.
    pub description: Optional<String>,

    /// Activity depends-on conditions.
    pub depends_on: Optional<Vec<ActivityDependency>>,

    /// Activity user properties.
    pub user_properties: Optional<Vec<UserProperty>>,

    pub(crate) _unknown_fields: wkt::model::Map,
}

impl UnknownActivity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl wkt::model::Model for UnknownActivity {
    fn type_name() -> &'static str {
        "UnknownActivity"
    }
}

impl std::fmt::Debug for UnknownActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UnknownActivity");
        debug_struct.field("activity_type", &self.activity_type);
        debug_struct.field("name", &self.name);
        debug_struct.field("description", &self.description);
        debug_struct.field("depends_on", &self.depends_on);
        debug_struct.field("user_properties", &self.user_properties);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
