//! Embedded survey and zone data for a small university campus.
//!
//! Twelve sensors scattered between the library, the lecture theatres and
//! the informatics building, all inside the default confinement area.

pub const LAUNCH_LAT: f64 = 55.9444;
pub const LAUNCH_LON: f64 = -3.1878;

// Readings of `null` or `NaN` come from sensors with a flat battery.
pub const SURVEYS_CSV: &str = "\
location,lat,lon,battery,reading\n\
slips.mass.baking,55.9451,-3.1876,96.3,118.42\n\
ever.pale.nest,55.9437,-3.1863,12.0,null\n\
lamp.sock.vines,55.9440,-3.1900,81.7,61.03\n\
rock.ring.plan,55.9446,-3.1884,44.2,92.77\n\
dent.cars.bend,55.9455,-3.1912,67.9,35.40\n\
hers.sold.raft,55.9433,-3.1875,5.1,NaN\n\
tree.jump.gift,55.9459,-3.1868,88.0,140.15\n\
cove.mild.tips,55.9428,-3.1860,53.6,77.90\n\
bats.hole.wind,55.9448,-3.1915,72.4,12.88\n\
pads.chop.mist,55.9438,-3.1910,30.3,203.61\n\
lime.wool.cart,55.9457,-3.1852,91.5,58.02\n\
gold.rain.sand,55.9431,-3.1905,60.0,99.99\n\
";

pub const ZONES_CSV: &str = "\
zone,lat,lon\n\
library,55.9430,-3.1895\n\
library,55.9430,-3.1885\n\
library,55.9436,-3.1885\n\
library,55.9436,-3.1895\n\
appleton,55.9446,-3.1870\n\
appleton,55.9446,-3.1862\n\
appleton,55.9452,-3.1862\n\
appleton,55.9450,-3.1870\n\
informatics,55.9453,-3.1905\n\
informatics,55.9453,-3.1895\n\
informatics,55.9458,-3.1893\n\
informatics,55.9460,-3.1900\n\
informatics,55.9457,-3.1906\n\
";
