//! Bundled symbol table.
//!
//! Entries are grouped by category; the order here is the catalog order used
//! everywhere a list is shown without recency ordering.

use super::symbol::Category as C;

pub(crate) static SYMBOLS: &[(&str, C)] = &[
    // General
    ("star", C::General),
    ("star.fill", C::General),
    ("star.circle", C::General),
    ("star.circle.fill", C::General),
    ("star.slash", C::General),
    ("star.square", C::General),
    ("flag", C::General),
    ("flag.fill", C::General),
    ("flag.circle", C::General),
    ("bell", C::General),
    ("bell.fill", C::General),
    ("bell.slash", C::General),
    ("tag", C::General),
    ("tag.fill", C::General),
    ("bookmark", C::General),
    ("bookmark.fill", C::General),
    ("sparkles", C::General),
    ("checkmark", C::General),
    ("checkmark.circle", C::General),
    ("checkmark.circle.fill", C::General),
    ("xmark", C::General),
    ("xmark.circle", C::General),
    ("xmark.circle.fill", C::General),
    ("plus", C::General),
    ("plus.circle", C::General),
    ("minus", C::General),
    ("minus.circle", C::General),
    ("info.circle", C::General),
    ("questionmark.circle", C::General),
    ("exclamationmark.triangle", C::General),
    ("magnifyingglass", C::General),
    ("gear", C::General),
    ("gearshape", C::General),
    ("gearshape.fill", C::General),
    ("house", C::General),
    ("house.fill", C::General),
    ("trash", C::General),
    ("trash.fill", C::General),
    ("folder", C::General),
    ("folder.fill", C::General),
    ("doc", C::General),
    ("doc.fill", C::General),
    ("doc.text", C::General),
    ("paperclip", C::General),
    ("link", C::General),
    ("lock", C::General),
    ("lock.fill", C::General),
    ("lock.open", C::General),
    ("key", C::General),
    ("key.fill", C::General),
    ("pin", C::General),
    ("pin.fill", C::General),
    ("ellipsis", C::General),
    ("ellipsis.circle", C::General),
    ("square.and.arrow.up", C::General),
    ("square.and.arrow.down", C::General),
    ("command", C::General),
    ("option", C::General),
    ("shift", C::General),
    ("control", C::General),
    ("delete.left", C::General),
    ("return", C::General),
    ("escape", C::General),
    // Communication
    ("message", C::Communication),
    ("message.fill", C::Communication),
    ("bubble.left", C::Communication),
    ("bubble.right", C::Communication),
    ("bubble.left.and.bubble.right", C::Communication),
    ("envelope", C::Communication),
    ("envelope.fill", C::Communication),
    ("envelope.open", C::Communication),
    ("phone", C::Communication),
    ("phone.fill", C::Communication),
    ("phone.arrow.up.right", C::Communication),
    ("video", C::Communication),
    ("video.fill", C::Communication),
    ("mic", C::Communication),
    ("mic.fill", C::Communication),
    ("mic.slash", C::Communication),
    ("paperplane", C::Communication),
    ("paperplane.fill", C::Communication),
    ("at", C::Communication),
    ("quote.bubble", C::Communication),
    ("megaphone", C::Communication),
    // Weather
    ("sun.max", C::Weather),
    ("sun.max.fill", C::Weather),
    ("sun.min", C::Weather),
    ("moon", C::Weather),
    ("moon.fill", C::Weather),
    ("moon.stars", C::Weather),
    ("cloud", C::Weather),
    ("cloud.fill", C::Weather),
    ("cloud.rain", C::Weather),
    ("cloud.bolt", C::Weather),
    ("cloud.snow", C::Weather),
    ("cloud.sun", C::Weather),
    ("snowflake", C::Weather),
    ("wind", C::Weather),
    ("tornado", C::Weather),
    ("thermometer", C::Weather),
    ("umbrella", C::Weather),
    ("umbrella.fill", C::Weather),
    ("bolt", C::Weather),
    ("bolt.fill", C::Weather),
    ("drop", C::Weather),
    ("drop.fill", C::Weather),
    // Objects
    ("pencil", C::Objects),
    ("pencil.circle", C::Objects),
    ("hammer", C::Objects),
    ("hammer.fill", C::Objects),
    ("wrench", C::Objects),
    ("wrench.and.screwdriver", C::Objects),
    ("paintbrush", C::Objects),
    ("paintbrush.fill", C::Objects),
    ("book", C::Objects),
    ("book.fill", C::Objects),
    ("books.vertical", C::Objects),
    ("briefcase", C::Objects),
    ("backpack", C::Objects),
    ("gift", C::Objects),
    ("gift.fill", C::Objects),
    ("lightbulb", C::Objects),
    ("lightbulb.fill", C::Objects),
    ("cup.and.saucer", C::Objects),
    ("fork.knife", C::Objects),
    ("crown", C::Objects),
    ("crown.fill", C::Objects),
    ("trophy", C::Objects),
    ("trophy.fill", C::Objects),
    ("puzzlepiece", C::Objects),
    ("binoculars", C::Objects),
    ("eyeglasses", C::Objects),
    // Devices
    ("desktopcomputer", C::Devices),
    ("laptopcomputer", C::Devices),
    ("iphone", C::Devices),
    ("ipad", C::Devices),
    ("applewatch", C::Devices),
    ("keyboard", C::Devices),
    ("printer", C::Devices),
    ("tv", C::Devices),
    ("display", C::Devices),
    ("headphones", C::Devices),
    ("airpods", C::Devices),
    ("gamecontroller", C::Devices),
    ("camera", C::Devices),
    ("camera.fill", C::Devices),
    ("externaldrive", C::Devices),
    ("cpu", C::Devices),
    ("memorychip", C::Devices),
    ("battery.100", C::Devices),
    ("battery.25", C::Devices),
    ("battery.0", C::Devices),
    // Connectivity
    ("wifi", C::Connectivity),
    ("wifi.slash", C::Connectivity),
    ("antenna.radiowaves.left.and.right", C::Connectivity),
    ("dot.radiowaves.left.and.right", C::Connectivity),
    ("network", C::Connectivity),
    ("globe", C::Connectivity),
    ("personalhotspot", C::Connectivity),
    ("airplayaudio", C::Connectivity),
    ("airplayvideo", C::Connectivity),
    // Transportation
    ("car", C::Transportation),
    ("car.fill", C::Transportation),
    ("bus", C::Transportation),
    ("tram", C::Transportation),
    ("airplane", C::Transportation),
    ("bicycle", C::Transportation),
    ("scooter", C::Transportation),
    ("sailboat", C::Transportation),
    ("ferry", C::Transportation),
    ("fuelpump", C::Transportation),
    // Human
    ("person", C::Human),
    ("person.fill", C::Human),
    ("person.circle", C::Human),
    ("person.2", C::Human),
    ("person.3", C::Human),
    ("person.crop.circle", C::Human),
    ("figure.walk", C::Human),
    ("figure.run", C::Human),
    ("hand.raised", C::Human),
    ("hand.thumbsup", C::Human),
    ("hand.thumbsup.fill", C::Human),
    ("hand.thumbsdown", C::Human),
    ("hand.wave", C::Human),
    ("eye", C::Human),
    ("eye.slash", C::Human),
    ("brain", C::Human),
    ("brain.head.profile", C::Human),
    ("face.smiling", C::Human),
    ("ear", C::Human),
    ("mouth", C::Human),
    // Nature
    ("leaf", C::Nature),
    ("leaf.fill", C::Nature),
    ("tree", C::Nature),
    ("flame", C::Nature),
    ("flame.fill", C::Nature),
    ("globe.americas", C::Nature),
    ("globe.europe.africa", C::Nature),
    ("mountain.2", C::Nature),
    ("tortoise", C::Nature),
    ("hare", C::Nature),
    ("ant", C::Nature),
    ("ladybug", C::Nature),
    ("fish", C::Nature),
    ("bird", C::Nature),
    ("pawprint", C::Nature),
    ("pawprint.fill", C::Nature),
    ("teddybear", C::Nature),
    ("carrot", C::Nature),
    // Editing
    ("pencil.tip", C::Editing),
    ("eraser", C::Editing),
    ("lasso", C::Editing),
    ("scissors", C::Editing),
    ("crop", C::Editing),
    ("crop.rotate", C::Editing),
    ("wand.and.stars", C::Editing),
    ("slider.horizontal.3", C::Editing),
    ("paintpalette", C::Editing),
    ("eyedropper", C::Editing),
    ("highlighter", C::Editing),
    ("rotate.left", C::Editing),
    ("rotate.right", C::Editing),
    ("perspective", C::Editing),
    // TextFormatting
    ("textformat", C::TextFormatting),
    ("bold", C::TextFormatting),
    ("italic", C::TextFormatting),
    ("underline", C::TextFormatting),
    ("strikethrough", C::TextFormatting),
    ("text.alignleft", C::TextFormatting),
    ("text.aligncenter", C::TextFormatting),
    ("text.alignright", C::TextFormatting),
    ("text.justify", C::TextFormatting),
    ("list.bullet", C::TextFormatting),
    ("list.number", C::TextFormatting),
    ("textformat.size", C::TextFormatting),
    ("character", C::TextFormatting),
    ("abc", C::TextFormatting),
    ("textformat.abc", C::TextFormatting),
    // Media
    ("play", C::Media),
    ("play.fill", C::Media),
    ("pause", C::Media),
    ("pause.fill", C::Media),
    ("stop", C::Media),
    ("stop.fill", C::Media),
    ("backward", C::Media),
    ("forward", C::Media),
    ("backward.fill", C::Media),
    ("forward.fill", C::Media),
    ("shuffle", C::Media),
    ("repeat", C::Media),
    ("music.note", C::Media),
    ("music.note.list", C::Media),
    ("speaker", C::Media),
    ("speaker.fill", C::Media),
    ("speaker.slash", C::Media),
    ("speaker.wave.2", C::Media),
    ("speaker.wave.3", C::Media),
    ("film", C::Media),
    ("photo", C::Media),
    ("photo.fill", C::Media),
    ("play.rectangle", C::Media),
    ("play.circle", C::Media),
    // Commerce
    ("cart", C::Commerce),
    ("cart.fill", C::Commerce),
    ("creditcard", C::Commerce),
    ("creditcard.fill", C::Commerce),
    ("banknote", C::Commerce),
    ("dollarsign", C::Commerce),
    ("dollarsign.circle", C::Commerce),
    ("eurosign", C::Commerce),
    ("bag", C::Commerce),
    ("bag.fill", C::Commerce),
    ("basket", C::Commerce),
    ("storefront", C::Commerce),
    ("barcode", C::Commerce),
    ("qrcode", C::Commerce),
    ("giftcard", C::Commerce),
    // Time
    ("clock", C::Time),
    ("clock.fill", C::Time),
    ("alarm", C::Time),
    ("alarm.fill", C::Time),
    ("stopwatch", C::Time),
    ("timer", C::Time),
    ("hourglass", C::Time),
    ("calendar", C::Time),
    ("calendar.badge.plus", C::Time),
    ("calendar.circle", C::Time),
    ("deskclock", C::Time),
    // Health
    ("heart", C::Health),
    ("heart.fill", C::Health),
    ("heart.circle", C::Health),
    ("heart.slash", C::Health),
    ("heart.text.square", C::Health),
    ("cross", C::Health),
    ("cross.fill", C::Health),
    ("cross.case", C::Health),
    ("pills", C::Health),
    ("pills.fill", C::Health),
    ("bandage", C::Health),
    ("stethoscope", C::Health),
    ("syringe", C::Health),
    ("waveform.path.ecg", C::Health),
    ("lungs", C::Health),
    ("bed.double", C::Health),
    // Shapes
    ("circle", C::Shapes),
    ("circle.fill", C::Shapes),
    ("square", C::Shapes),
    ("square.fill", C::Shapes),
    ("triangle", C::Shapes),
    ("triangle.fill", C::Shapes),
    ("diamond", C::Shapes),
    ("diamond.fill", C::Shapes),
    ("hexagon", C::Shapes),
    ("hexagon.fill", C::Shapes),
    ("octagon", C::Shapes),
    ("capsule", C::Shapes),
    ("oval", C::Shapes),
    ("rectangle", C::Shapes),
    ("seal", C::Shapes),
    ("shield", C::Shapes),
    ("shield.fill", C::Shapes),
    ("app", C::Shapes),
    ("square.on.square", C::Shapes),
    ("square.on.circle", C::Shapes),
    ("circle.grid.2x2", C::Shapes),
    ("square.grid.2x2", C::Shapes),
    ("square.grid.3x3", C::Shapes),
    // Arrows
    ("arrow.up", C::Arrows),
    ("arrow.down", C::Arrows),
    ("arrow.left", C::Arrows),
    ("arrow.right", C::Arrows),
    ("arrow.up.circle", C::Arrows),
    ("arrow.down.circle", C::Arrows),
    ("arrow.left.circle", C::Arrows),
    ("arrow.right.circle", C::Arrows),
    ("arrow.up.arrow.down", C::Arrows),
    ("arrow.left.arrow.right", C::Arrows),
    ("arrow.clockwise", C::Arrows),
    ("arrow.counterclockwise", C::Arrows),
    ("arrow.triangle.2.circlepath", C::Arrows),
    ("arrow.uturn.left", C::Arrows),
    ("arrow.uturn.right", C::Arrows),
    ("chevron.up", C::Arrows),
    ("chevron.down", C::Arrows),
    ("chevron.left", C::Arrows),
    ("chevron.right", C::Arrows),
    ("arrowshape.turn.up.left", C::Arrows),
    ("arrow.up.right.square", C::Arrows),
    ("arrow.down.to.line", C::Arrows),
    // Math
    ("plus.forwardslash.minus", C::Math),
    ("multiply", C::Math),
    ("divide", C::Math),
    ("equal", C::Math),
    ("lessthan", C::Math),
    ("greaterthan", C::Math),
    ("number", C::Math),
    ("percent", C::Math),
    ("function", C::Math),
    ("sum", C::Math),
    ("x.squareroot", C::Math),
    ("infinity", C::Math),
    ("plusminus", C::Math),
    ("minus.forwardslash.plus", C::Math),
    ("pi", C::Math),
];
