use crate::errors::FlightError;

/// Nose cone profile families supported by the aerodynamic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoseShape {
    Conical,
    Ogive,
    Elliptical,
    VonKarman,
    Parabolic,
}

#[derive(Debug, Clone)]
pub struct NoseCone {
    pub shape: NoseShape,
    pub length: f64,   // mm
    pub diameter: f64, // mm, at the base
}

impl NoseCone {
    pub fn new(shape: NoseShape, length: f64, diameter: f64) -> Self {
        NoseCone {
            shape,
            length,
            diameter,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BodyTube {
    pub length: f64,   // mm
    pub diameter: f64, // mm
    pub position: f64, // mm from nose tip
}

impl BodyTube {
    pub fn new(length: f64, diameter: f64, position: f64) -> Self {
        BodyTube {
            length,
            diameter,
            position,
        }
    }
}

/// Conical diameter change between two body sections. A shoulder widens
/// aft (aft > fore); a boat-tail narrows aft (aft < fore).
#[derive(Debug, Clone)]
pub struct Transition {
    pub fore_diameter: f64, // mm
    pub aft_diameter: f64,  // mm
    pub length: f64,        // mm
    pub position: f64,      // mm from nose tip
}

impl Transition {
    pub fn new(fore_diameter: f64, aft_diameter: f64, length: f64, position: f64) -> Self {
        Transition {
            fore_diameter,
            aft_diameter,
            length,
            position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FinSet {
    pub count: u32,
    pub root_chord: f64,  // mm
    pub tip_chord: f64,   // mm
    pub semi_span: f64,   // mm, exposed span of one fin
    pub sweep: f64,       // mm, leading-edge sweep distance root to tip
    pub position: f64,    // mm from nose tip to the root leading edge
    pub body_radius: f64, // mm, body radius at the fin station
}

impl FinSet {
    pub fn new(
        count: u32,
        root_chord: f64,
        tip_chord: f64,
        semi_span: f64,
        sweep: f64,
        position: f64,
        body_radius: f64,
    ) -> Self {
        FinSet {
            count,
            root_chord,
            tip_chord,
            semi_span,
            sweep,
            position,
            body_radius,
        }
    }

    /// Mean aerodynamic chord of the trapezoidal planform.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let (cr, ct) = (self.root_chord, self.tip_chord);
        (2.0 / 3.0) * (cr + ct - cr * ct / (cr + ct))
    }

    /// Returns a copy with all planform dimensions multiplied by `factor`.
    /// The axial position and body radius are unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        FinSet {
            count: self.count,
            root_chord: self.root_chord * factor,
            tip_chord: self.tip_chord * factor,
            semi_span: self.semi_span * factor,
            sweep: self.sweep * factor,
            position: self.position,
            body_radius: self.body_radius,
        }
    }
}

/// Immutable axial layout of a design, positions measured from the nose tip.
#[derive(Debug, Clone)]
pub struct RocketGeometry {
    pub nose: NoseCone,
    pub body_tubes: Vec<BodyTube>,
    pub transitions: Vec<Transition>,
    pub fins: FinSet,
}

impl RocketGeometry {
    pub fn new(
        nose: NoseCone,
        body_tubes: Vec<BodyTube>,
        transitions: Vec<Transition>,
        fins: FinSet,
    ) -> Self {
        RocketGeometry {
            nose,
            body_tubes,
            transitions,
            fins,
        }
    }

    /// Reference diameter for normal-force coefficients and caliber ratings:
    /// the maximum diameter anywhere on the airframe.
    pub fn reference_diameter(&self) -> f64 {
        let mut diameter = self.nose.diameter;
        for tube in &self.body_tubes {
            diameter = diameter.max(tube.diameter);
        }
        for transition in &self.transitions {
            diameter = diameter.max(transition.fore_diameter.max(transition.aft_diameter));
        }
        diameter
    }

    /// Overall length from nose tip to the aft end of the last body section.
    pub fn total_length(&self) -> f64 {
        let mut length = self.nose.length;
        for tube in &self.body_tubes {
            length = length.max(tube.position + tube.length);
        }
        for transition in &self.transitions {
            length = length.max(transition.position + transition.length);
        }
        length
    }

    /// Fails fast on malformed geometry. Required fields are never defaulted.
    pub fn validate(&self) -> Result<(), FlightError> {
        if self.nose.length <= 0.0 || self.nose.diameter <= 0.0 {
            return Err(FlightError::Validation(format!(
                "nose cone dimensions must be positive, got length {} mm, diameter {} mm",
                self.nose.length, self.nose.diameter
            )));
        }
        if self.body_tubes.is_empty() {
            return Err(FlightError::Validation(
                "geometry requires at least one body tube".to_string(),
            ));
        }
        for (i, tube) in self.body_tubes.iter().enumerate() {
            if tube.length <= 0.0 || tube.diameter <= 0.0 {
                return Err(FlightError::Validation(format!(
                    "body tube {} dimensions must be positive",
                    i
                )));
            }
        }
        for (i, transition) in self.transitions.iter().enumerate() {
            if transition.length <= 0.0
                || transition.fore_diameter <= 0.0
                || transition.aft_diameter <= 0.0
            {
                return Err(FlightError::Validation(format!(
                    "transition {} dimensions must be positive",
                    i
                )));
            }
        }
        let fins = &self.fins;
        if fins.count == 0 {
            return Err(FlightError::Validation(
                "fin set requires at least one fin".to_string(),
            ));
        }
        if fins.root_chord <= 0.0 || fins.tip_chord <= 0.0 || fins.semi_span <= 0.0 {
            return Err(FlightError::Validation(
                "fin chord and span dimensions must be positive".to_string(),
            ));
        }
        if fins.sweep < 0.0 {
            return Err(FlightError::Validation(
                "fin sweep distance cannot be negative".to_string(),
            ));
        }
        if fins.body_radius <= 0.0 {
            return Err(FlightError::Validation(
                "body radius at the fin station must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
