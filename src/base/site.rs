use super::{LookupTable, ParamPermafrost};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the optional environment tables shared by all points of a block
///
/// A `None` entry means "not configured"; callers fall back to the constant
/// in [ParamPermafrost].
pub struct SiteTables {
    /// Sea level versus time
    pub sea_level: Option<LookupTable>,

    /// Salinity versus height above mean sea level
    pub salinity: Option<LookupTable>,

    /// Porosity versus height above mean sea level
    pub porosity: Option<LookupTable>,

    /// Freezing-curve width versus height above mean sea level
    pub curve_width: Option<LookupTable>,

    /// Ocean salinity versus time
    pub ocean_salinity: Option<LookupTable>,
}

impl SiteTables {
    /// Allocates an instance with no table configured
    pub fn empty() -> Self {
        SiteTables {
            sea_level: None,
            salinity: None,
            porosity: None,
            curve_width: None,
            ocean_salinity: None,
        }
    }
}

/// Holds the material parameters and raw environment samples of one site
///
/// This is the on-disk (JSON) representation; [SiteData::build_tables]
/// validates the sample arrays and produces the runtime [SiteTables].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteData {
    /// Material parameters
    pub param: ParamPermafrost,

    /// Time samples for the time-dependent tables
    #[serde(default)]
    pub time: Vec<f64>,

    /// Sea level at each time sample
    #[serde(default)]
    pub sea_level: Vec<f64>,

    /// Height-above-mean-sea-level samples for the depth-dependent tables
    #[serde(default)]
    pub z_depth: Vec<f64>,

    /// Salinity at each depth sample
    #[serde(default)]
    pub salinity: Vec<f64>,

    /// Porosity at each depth sample
    #[serde(default)]
    pub porosity: Vec<f64>,

    /// Freezing-curve width at each depth sample
    #[serde(default)]
    pub curve_width: Vec<f64>,

    /// Ocean salinity at each time sample
    #[serde(default)]
    pub ocean_salinity: Vec<f64>,
}

impl SiteData {
    /// Allocates an instance with the given parameters and no samples
    pub fn new(param: ParamPermafrost) -> Self {
        SiteData {
            param,
            time: Vec::new(),
            sea_level: Vec::new(),
            z_depth: Vec::new(),
            salinity: Vec::new(),
            porosity: Vec::new(),
            curve_width: Vec::new(),
            ocean_salinity: Vec::new(),
        }
    }

    /// Reads a JSON file containing this struct
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open site data file")?;
        let buffered = BufReader::new(file);
        let data = serde_json::from_reader(buffered).map_err(|_| "cannot parse site data file")?;
        Ok(data)
    }

    /// Writes a JSON file with this struct
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(path).map_err(|_| "cannot create site data file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write site data file")?;
        Ok(())
    }

    /// Validates the sample arrays and builds the runtime tables
    ///
    /// Empty sample arrays yield unconfigured (`None`) tables; mismatched
    /// array lengths are configuration errors reported before any stepping.
    pub fn build_tables(&self) -> Result<SiteTables, StrError> {
        let mut tables = SiteTables::empty();
        if !self.sea_level.is_empty() {
            if self.time.len() != self.sea_level.len() {
                return Err("number of times and number of sea level values must match");
            }
            tables.sea_level = Some(LookupTable::new(&self.time, &self.sea_level)?);
        }
        if !self.salinity.is_empty() {
            if self.z_depth.len() != self.salinity.len() {
                return Err("number of z values and number of salinity values must match");
            }
            tables.salinity = Some(LookupTable::new(&self.z_depth, &self.salinity)?);
        }
        if !self.porosity.is_empty() {
            if self.z_depth.len() != self.porosity.len() {
                return Err("number of z values and number of porosity values must match");
            }
            tables.porosity = Some(LookupTable::new(&self.z_depth, &self.porosity)?);
        }
        if !self.curve_width.is_empty() {
            if self.z_depth.len() != self.curve_width.len() {
                return Err("number of z values and number of freezing curve width values must match");
            }
            tables.curve_width = Some(LookupTable::new(&self.z_depth, &self.curve_width)?);
        }
        if !self.ocean_salinity.is_empty() {
            if self.time.len() != self.ocean_salinity.len() {
                return Err("number of times and number of ocean salinity values must match");
            }
            tables.ocean_salinity = Some(LookupTable::new(&self.time, &self.ocean_salinity)?);
        }
        Ok(tables)
    }
}

/// Calculates a linear temperature profile between two heights
///
/// Returns the temperature at each height in `heights`, interpolating
/// linearly between (`z_bottom`, `temp_bottom`) and (`z_top`, `temp_top`).
pub fn linear_temperature_profile(
    heights: &[f64],
    z_bottom: f64,
    z_top: f64,
    temp_bottom: f64,
    temp_top: f64,
) -> Result<Vec<f64>, StrError> {
    if z_top == z_bottom {
        return Err("top and bottom heights must differ");
    }
    if temp_top == temp_bottom {
        return Err("top and bottom temperatures must differ");
    }
    let slope = (temp_top - temp_bottom) / (z_top - z_bottom);
    Ok(heights.iter().map(|z| temp_bottom + slope * (z - z_bottom)).collect())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
