// Sensor operations: motion, temperature, light level, device power.

use std::collections::HashMap;

use super::Home;
use crate::error::Error;
use crate::models::{
    DevicePowerGet, LightLevelGet, LightLevelPut, MotionGet, MotionPut, TemperatureGet,
    TemperaturePut,
};

impl Home {
    /// All motion sensors, keyed by resource id.
    pub async fn motion_sensors(&self) -> Result<HashMap<String, MotionGet>, Error> {
        let data: Vec<MotionGet> = self.get_list("motion").await?;
        Ok(data.into_iter().map(|m| (m.id.clone(), m)).collect())
    }

    /// A single motion sensor by id.
    pub async fn motion_sensor(&self, id: &str) -> Result<MotionGet, Error> {
        self.get_single(&format!("motion/{id}")).await
    }

    /// Enable or disable a motion sensor.
    pub async fn update_motion_sensor(&self, id: &str, body: &MotionPut) -> Result<(), Error> {
        self.put_ack(&format!("motion/{id}"), body).await
    }

    /// All temperature sensors, keyed by resource id.
    pub async fn temperature_sensors(&self) -> Result<HashMap<String, TemperatureGet>, Error> {
        let data: Vec<TemperatureGet> = self.get_list("temperature").await?;
        Ok(data.into_iter().map(|t| (t.id.clone(), t)).collect())
    }

    /// A single temperature sensor by id.
    pub async fn temperature_sensor(&self, id: &str) -> Result<TemperatureGet, Error> {
        self.get_single(&format!("temperature/{id}")).await
    }

    /// Enable or disable a temperature sensor.
    pub async fn update_temperature_sensor(
        &self,
        id: &str,
        body: &TemperaturePut,
    ) -> Result<(), Error> {
        self.put_ack(&format!("temperature/{id}"), body).await
    }

    /// All ambient light level sensors, keyed by resource id.
    pub async fn light_level_sensors(&self) -> Result<HashMap<String, LightLevelGet>, Error> {
        let data: Vec<LightLevelGet> = self.get_list("light_level").await?;
        Ok(data.into_iter().map(|l| (l.id.clone(), l)).collect())
    }

    /// A single light level sensor by id.
    pub async fn light_level_sensor(&self, id: &str) -> Result<LightLevelGet, Error> {
        self.get_single(&format!("light_level/{id}")).await
    }

    /// Enable or disable a light level sensor.
    pub async fn update_light_level_sensor(
        &self,
        id: &str,
        body: &LightLevelPut,
    ) -> Result<(), Error> {
        self.put_ack(&format!("light_level/{id}"), body).await
    }

    /// Battery state of every battery-powered device, keyed by resource id.
    pub async fn device_powers(&self) -> Result<HashMap<String, DevicePowerGet>, Error> {
        let data: Vec<DevicePowerGet> = self.get_list("device_power").await?;
        Ok(data.into_iter().map(|p| (p.id.clone(), p)).collect())
    }

    /// Battery state of one device by resource id.
    pub async fn device_power(&self, id: &str) -> Result<DevicePowerGet, Error> {
        self.get_single(&format!("device_power/{id}")).await
    }
}
